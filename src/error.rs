//! Error types for Legendre encoding.

use thiserror::Error;

/// Result type alias using [`EncodingError`].
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Errors that can occur when configuring an encoder.
///
/// Encoding itself never fails: overflow to infinity and NaN are
/// ordinary output values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Polynomial order below the minimum of 1.
    #[error("Invalid order: the order of the Legendre encoding must be greater than 0, got {order}")]
    InvalidOrder { order: usize },
}

impl EncodingError {
    /// Create an invalid order error.
    pub fn invalid_order(order: usize) -> Self {
        Self::InvalidOrder { order }
    }
}
