//! Legendre basis encoding of scalar inputs into sparse-matrix triplets.
//!
//! Each call to [`Legendre::encode`] expands one scalar x into the row
//! `[P_0(x), P_1(x), ..., P_N(x)]` of a feature matrix, written as
//! `N + 1` triplets starting at a caller-chosen column. Repeated calls,
//! typically one per matrix row, build up a triplet list that can be
//! handed to `faer::sparse::SparseColMat::try_new_from_triplets`.
//!
//! # Example
//!
//! ```
//! use legendre_encoding::{Legendre, SparseEntry};
//!
//! let legendre = Legendre::new(2)?;
//! let mut entries: Vec<SparseEntry> = Vec::new();
//! legendre.encode(&mut entries, 0, 1, 0.5);
//!
//! assert_eq!(entries.len(), 3);
//! assert_eq!(entries[2].col, 3);
//! assert_eq!(entries[2].val, -0.125);
//! # Ok::<(), legendre_encoding::EncodingError>(())
//! ```

use faer::sparse::Triplet;

use crate::SparseEntry;
use crate::error::{EncodingError, Result};
use crate::polynomial::LegendreRecurrence;

/// Legendre polynomial encoder of fixed order.
///
/// Holds only the order, so it is `Copy` and can be shared freely across
/// threads. Every encode call is independent of the ones before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Legendre {
    /// Highest polynomial degree emitted (at least 1)
    order: usize,
}

impl Legendre {
    /// Order used by [`Legendre::default`] (quadratic).
    pub const DEFAULT_ORDER: usize = 2;

    /// Create an encoder emitting P_0 through P_order.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidOrder`] if `order` is zero.
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 {
            return Err(EncodingError::invalid_order(order));
        }
        Ok(Self { order })
    }

    /// Highest polynomial degree emitted.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of entries (and columns) produced by one encode call.
    #[inline]
    pub fn n_terms(&self) -> usize {
        self.order + 1
    }

    /// Append `P_0(x), ..., P_order(x)` to `entries` as triplets.
    ///
    /// Entries are pushed at `(row, col + n)` for n = 0..=order, in that
    /// order. Existing entries are left untouched. `row` and `col` are not
    /// bounds-checked.
    ///
    /// Any x is accepted. For |x| <= 1 every value is finite; outside that
    /// range values may overflow to ±inf, and NaN input yields NaN for every
    /// column after the first. P_0 is always exactly 1.
    pub fn encode(&self, entries: &mut Vec<SparseEntry>, row: usize, col: usize, x: f64) {
        entries.reserve(self.n_terms());

        let mut overflowed = false;
        for (n, p) in LegendreRecurrence::new(x).take(self.n_terms()).enumerate() {
            if !overflowed && !p.is_finite() {
                overflowed = true;
                log::trace!("Legendre recurrence left the finite range at P_{n}({x}) = {p}");
            }
            entries.push(Triplet::new(row, col + n, p));
        }
    }

    /// Encode a single row into a freshly allocated list.
    pub fn encode_to_vec(&self, row: usize, col: usize, x: f64) -> Vec<SparseEntry> {
        let mut entries = Vec::with_capacity(self.n_terms());
        self.encode(&mut entries, row, col, x);
        entries
    }
}

impl Default for Legendre {
    fn default() -> Self {
        Self {
            order: Self::DEFAULT_ORDER,
        }
    }
}
