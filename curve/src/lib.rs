//! Short Weierstrass elliptic curve groups over prime fields.
//!
//! This crate provides the primitives a signature scheme consumes: named curve
//! parameters, affine points, scalar multiplication, the combined
//! multiply-add used by verifiers, key validation, and keypair generation
//! from a caller-supplied random source. Integers are `num_bigint::BigUint`.

mod affine;
mod curves;
mod errors;
mod field;
mod group;
mod keypair;
mod msm;
mod projective;
mod random;
mod secret;

pub use affine::AffinePoint;
pub use curves::CurveId;
pub use errors::Error;
pub use field::PrimeField;
pub use group::{EcGroup, MAX_SCALAR_TRIES};
pub use keypair::EcKeypair;
pub use random::RandomSource;
pub use secret::SecretScalar;
