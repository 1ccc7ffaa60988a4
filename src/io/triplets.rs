//! Human-readable rendering and comparison of triplet lists.
//!
//! The text form is meant for logs and test failure messages; there is no
//! parser for it.
//!
//! # Format
//!
//! ```text
//! [{0,1,1},{0,2,0.5},{0,3,-0.125}]
//! ```
//!
//! Entries appear in list order with no whitespace. Values use the default
//! `f64` formatting except for non-finite values, which render as `inf`,
//! `-inf` and `nan`.

use std::fmt;

use crate::SparseEntry;

/// Relative tolerance used by [`triplet_eq`] for finite values.
pub const TRIPLET_EPSILON: f64 = 1e-8;

/// Display adapter for a single triplet: `{row,col,value}`.
#[derive(Clone, Copy)]
pub struct TripletDisplay<'a>(pub &'a SparseEntry);

impl fmt::Display for TripletDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        write!(f, "{{{},{},", entry.row, entry.col)?;
        write_value(f, entry.val)?;
        f.write_str("}")
    }
}

/// Display adapter for a triplet list: `[{r,c,v},{r,c,v},...]`.
///
/// # Example
///
/// ```
/// use faer::sparse::Triplet;
/// use legendre_encoding::io::TripletList;
///
/// let entries = vec![Triplet::new(0, 1, 1.0), Triplet::new(0, 2, f64::NAN)];
/// assert_eq!(TripletList(&entries).to_string(), "[{0,1,1},{0,2,nan}]");
/// ```
#[derive(Clone, Copy)]
pub struct TripletList<'a>(pub &'a [SparseEntry]);

impl fmt::Display for TripletList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", TripletDisplay(entry))?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for TripletList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Render a triplet list to a string.
pub fn format_triplets(entries: &[SparseEntry]) -> String {
    TripletList(entries).to_string()
}

fn write_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    // Rust prints NaN as "NaN"
    if value.is_nan() {
        f.write_str("nan")
    } else {
        write!(f, "{}", value)
    }
}

/// Compare two triplets, tolerating rounding in finite values.
///
/// Coordinates must match exactly. A finite `lhs` value matches when
/// `|lhs - rhs| < ε (1 + max(|lhs|, |rhs|))` with ε = [`TRIPLET_EPSILON`].
/// NaN matches only NaN and infinities match only the same-signed infinity.
pub fn triplet_eq(lhs: &SparseEntry, rhs: &SparseEntry) -> bool {
    if lhs.row != rhs.row || lhs.col != rhs.col {
        return false;
    }

    let (a, b) = (lhs.val, rhs.val);
    if a.is_finite() {
        return (a - b).abs() < TRIPLET_EPSILON * (1.0 + a.abs().max(b.abs()));
    }
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

/// Element-wise [`triplet_eq`] over two lists of equal length.
pub fn triplets_eq(lhs: &[SparseEntry], rhs: &[SparseEntry]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| triplet_eq(a, b))
}
