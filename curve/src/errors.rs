//! Error types for group loading, point arithmetic and key handling.

use thiserror::Error;

/// Errors that can occur while working with curve groups and keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was malformed or out of range, or the group lacks data the
    /// operation needs (for example a group without a known subgroup order).
    #[error("bad input parameters")]
    BadInput,
    /// The curve identifier is unknown or has no parameters in this crate.
    #[error("requested curve not available")]
    FeatureUnavailable,
    /// A private scalar is outside `[1, N-1]` or a public point fails validation.
    #[error("invalid private or public key")]
    InvalidKey,
    /// The random source kept producing unusable values.
    #[error("generation of a random value failed")]
    RandomFailed,
    /// The random source itself reported a failure.
    #[error("random source failed: {0}")]
    RandomSource(String),
    /// Inversion of zero, or of a value sharing a factor with the modulus.
    #[error("value is not invertible")]
    NotInvertible,
}
