//! Error types for the ECDSA engine.
//!
//! Every error maps to a small negative integer through `code()`, so callers
//! that report numeric failure codes can keep doing so.

use thiserror::Error;

/// Failures of the DER decoder and encoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Asn1Error {
    /// The input ended in the middle of an element.
    #[error("out of data when parsing an ASN.1 element")]
    OutOfData,
    /// A tag other than the expected one was found.
    #[error("unexpected ASN.1 tag")]
    UnexpectedTag,
    /// A length field is malformed or longer than supported.
    #[error("invalid ASN.1 length")]
    InvalidLength,
    /// The SEQUENCE length disagrees with the elements it contains.
    #[error("actual ASN.1 length differs from the expected length")]
    LengthMismatch,
    /// An element has a well-formed header but unusable content.
    #[error("invalid ASN.1 data")]
    InvalidData,
    /// The output buffer cannot hold the encoding.
    #[error("ASN.1 buffer too small")]
    BufTooSmall,
}

impl Asn1Error {
    pub fn code(self) -> i32 {
        match self {
            Asn1Error::OutOfData => -0x0060,
            Asn1Error::UnexpectedTag => -0x0062,
            Asn1Error::InvalidLength => -0x0064,
            Asn1Error::LengthMismatch => -0x0066,
            Asn1Error::InvalidData => -0x0068,
            Asn1Error::BufTooSmall => -0x006C,
        }
    }
}

/// Failures of the HMAC_DRBG.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DrbgError {
    #[error("too many random bytes requested in a single call")]
    RequestTooBig,
    #[error("input too large")]
    InputTooBig,
    /// The request budget is spent and there is no entropy source to reseed
    /// from.
    #[error("generator must be reseeded")]
    ReseedRequired,
}

impl DrbgError {
    pub fn code(self) -> i32 {
        match self {
            DrbgError::RequestTooBig => -0x0003,
            DrbgError::InputTooBig => -0x0005,
            DrbgError::ReseedRequired => -0x0009,
        }
    }
}

/// Errors returned by signing, verification and signature encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed arguments, an unsupported hash, or a group without an order.
    #[error("bad input parameters")]
    BadInput,
    /// The caller's output buffer is shorter than the encoding.
    #[error("output buffer too small")]
    BufferTooSmall,
    #[error("requested feature not available")]
    FeatureUnavailable,
    /// The signature does not verify. Every failed check reports this same
    /// value.
    #[error("signature verification failed")]
    VerifyFailed,
    /// A bounded retry loop ran out of attempts.
    #[error("generation of random value failed")]
    RandomFailed,
    #[error("invalid private or public key")]
    InvalidKey,
    /// A valid signature was followed by extra bytes.
    #[error("signature is valid but shorter than the supplied buffer")]
    SigLenMismatch,
    #[error("malformed signature encoding: {0}")]
    Asn1(#[from] Asn1Error),
    #[error("HMAC_DRBG: {0}")]
    Drbg(#[from] DrbgError),
    /// The caller's random source failed.
    #[error("random source failed: {0}")]
    RandomSource(String),
    #[error("value is not invertible")]
    NotInvertible,
}

impl Error {
    /// Numeric code of this error.
    ///
    /// Decoding errors are reported as the sum of the bad-input code and the
    /// ASN.1 code, e.g. `-0x4F80 + -0x0066` for a length mismatch.
    pub fn code(&self) -> i32 {
        match self {
            Error::BadInput => -0x4F80,
            Error::BufferTooSmall => -0x4F00,
            Error::FeatureUnavailable => -0x4E80,
            Error::VerifyFailed => -0x4E00,
            Error::RandomFailed | Error::RandomSource(_) => -0x4D00,
            Error::InvalidKey => -0x4C80,
            Error::SigLenMismatch => -0x4C00,
            Error::Asn1(err) => Error::BadInput.code() + err.code(),
            Error::Drbg(err) => err.code(),
            Error::NotInvertible => -0x000E,
        }
    }
}

impl From<curve::Error> for Error {
    fn from(err: curve::Error) -> Self {
        match err {
            curve::Error::BadInput => Error::BadInput,
            curve::Error::FeatureUnavailable => Error::FeatureUnavailable,
            curve::Error::InvalidKey => Error::InvalidKey,
            curve::Error::RandomFailed => Error::RandomFailed,
            curve::Error::RandomSource(msg) => Error::RandomSource(msg),
            curve::Error::NotInvertible => Error::NotInvertible,
        }
    }
}
