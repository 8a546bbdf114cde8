//! ECDSA signatures over short Weierstrass curves.
//!
//! This library implements the Elliptic Curve Digital Signature Algorithm on
//! top of the `curve` crate:
//! - Randomized signing with a blinded modular inversion
//! - Deterministic signing (RFC 6979) through an internal HMAC_DRBG
//! - Verification with uniform failure reporting
//! - DER encoding and decoding of `(r, s)`
//!
//! # Overview
//!
//! The low-level functions [`sign`], [`sign_deterministic`] and [`verify`]
//! work on a group, a scalar or point, and a message digest. An
//! [`EcdsaContext`] bundles a group with one identity's keys and speaks DER.
//! Which nonce source a signature uses is chosen per call with [`SignMode`].
//!
//! # Example
//!
//! ```
//! use ecdsa::{CurveId, EcdsaContext, HashAlgorithm, SignMode};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let ctx = EcdsaContext::generate(CurveId::Secp256r1, &mut rng)?;
//!
//! // Sign a SHA-256 digest with a random nonce
//! let digest = HashAlgorithm::Sha256.digest(b"hello ecdsa");
//! let sig = ctx.write_signature(SignMode::Randomized(&mut rng), &digest)?;
//! ctx.read_signature(&digest, &sig)?;
//!
//! // Deterministic signatures are reproducible
//! let a = ctx.sign_message(HashAlgorithm::Sha256, b"hello ecdsa")?;
//! let b = ctx.sign_message(HashAlgorithm::Sha256, b"hello ecdsa")?;
//! assert_eq!(a, b);
//! # Ok::<(), ecdsa::Error>(())
//! ```
//!
//! # Security Considerations
//!
//! - Randomized signing needs a cryptographically secure random source
//! - Private scalars and nonces are zeroized when dropped
//! - Verification is not constant time; it only handles public data

mod asn1;
mod constants;
mod context;
mod derive;
mod drbg;
mod errors;
mod hash;
mod sign;
mod signature;
mod verify;

#[cfg(test)]
mod tests;

pub use constants::{
    DRBG_MAX_INPUT, DRBG_MAX_REQUEST, DRBG_MAX_SEED_INPUT, DRBG_RESEED_INTERVAL, MAX_BLIND_TRIES,
    MAX_KEY_TRIES, MAX_SIGN_TRIES, MAX_SIGNATURE_LEN, max_signature_len,
};
pub use context::EcdsaContext;
pub use curve::{AffinePoint, CurveId, EcGroup, EcKeypair, RandomSource};
pub use derive::derive_scalar;
pub use drbg::HmacDrbg;
pub use errors::{Asn1Error, DrbgError, Error};
pub use hash::HashAlgorithm;
pub use sign::{SignMode, sign, sign_deterministic, sign_with};
pub use signature::Signature;
pub use verify::verify;
