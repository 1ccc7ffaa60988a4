//! Polynomial evaluation.
//!
//! This module provides:
//! - 1D Legendre polynomials via the three-term recurrence
//! - An iterator over successive Legendre values at a fixed abscissa

mod legendre;

pub use legendre::{LegendreRecurrence, legendre};
