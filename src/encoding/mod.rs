//! Basis encoders that expand scalars into sparse-matrix rows.
//!
//! This module provides:
//! - [`Legendre`]: Legendre polynomial basis P_0..P_N of a fixed order

mod legendre;

pub use legendre::Legendre;
