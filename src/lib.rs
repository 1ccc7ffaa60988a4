//! # legendre-encoding
//!
//! Legendre polynomial basis expansions of scalar inputs, emitted as
//! sparse-matrix triplets.
//!
//! This crate provides:
//! - Legendre polynomial evaluation with an explicit overflow policy
//! - A fixed-order encoder appending `P_0(x)..P_N(x)` as `(row, col, value)`
//!   triplets to a caller-owned list
//! - A compact debug rendering of triplet lists
//!
//! The triplets are [`faer::sparse::Triplet`] values and can be assembled
//! with `faer::sparse::SparseColMat::try_new_from_triplets`.

pub mod encoding;
pub mod error;
pub mod io;
pub mod polynomial;

/// One nonzero contribution `(row, col, val)` to a sparse matrix.
pub type SparseEntry = faer::sparse::Triplet<usize, usize, f64>;

// Re-export main types for convenience
pub use encoding::Legendre;
pub use error::{EncodingError, Result};
pub use io::{TripletList, format_triplets};
pub use polynomial::{LegendreRecurrence, legendre};
