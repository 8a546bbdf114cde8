//! ECDSA context: a curve group bound to one identity's key material.

use curve::{AffinePoint, CurveId, EcGroup, EcKeypair, RandomSource, SecretScalar};
use tracing::debug;

use crate::errors::Error;
use crate::hash::HashAlgorithm;
use crate::sign::{SignMode, sign_with};
use crate::signature::Signature;
use crate::verify::verify;

/// A group, an optional private scalar `d` and the public point `Q`.
///
/// A context built by [`EcdsaContext::generate`] or
/// [`EcdsaContext::from_keypair`] can sign and verify; one built by
/// [`EcdsaContext::verify_only`] can only verify. `d` is zeroized when the
/// context is dropped.
#[derive(Clone, Debug)]
pub struct EcdsaContext {
    group: EcGroup,
    d: Option<SecretScalar>,
    q: AffinePoint,
}

impl EcdsaContext {
    /// Loads the named curve and generates a fresh keypair on it.
    pub fn generate<R: RandomSource + ?Sized>(id: CurveId, rng: &mut R) -> Result<Self, Error> {
        let group = EcGroup::load(id)?;
        let (d, q) = group.generate_keypair(rng)?;
        debug!(curve = %id, "generated ecdsa keypair");
        Ok(Self {
            group,
            d: Some(d),
            q,
        })
    }

    /// Copies the group and both halves of an existing keypair.
    pub fn from_keypair(keypair: &EcKeypair) -> Self {
        Self {
            group: keypair.group().clone(),
            d: Some(keypair.secret().clone()),
            q: keypair.public().clone(),
        }
    }

    /// A context holding only a public point.
    pub fn verify_only(group: EcGroup, q: AffinePoint) -> Result<Self, Error> {
        group.check_pubkey(&q)?;
        Ok(Self { group, d: None, q })
    }

    #[inline]
    pub fn group(&self) -> &EcGroup {
        &self.group
    }

    #[inline]
    pub fn public(&self) -> &AffinePoint {
        &self.q
    }

    /// Whether the context holds a private scalar.
    #[inline]
    pub fn can_sign(&self) -> bool {
        self.d.is_some()
    }

    fn secret(&self) -> Result<&SecretScalar, Error> {
        self.d.as_ref().ok_or(Error::BadInput)
    }

    /// Signs `hash` and returns the DER-encoded signature.
    pub fn write_signature(&self, mode: SignMode<'_>, hash: &[u8]) -> Result<Vec<u8>, Error> {
        self.sign_digest(mode, hash)?.to_der()
    }

    /// Signs `hash` and writes the DER-encoded signature into `out`,
    /// returning its length. `out` is left untouched on failure.
    pub fn write_signature_into(
        &self,
        mode: SignMode<'_>,
        hash: &[u8],
        out: &mut [u8],
    ) -> Result<usize, Error> {
        self.sign_digest(mode, hash)?.write_der(out)
    }

    /// Signs `hash` and returns the signature values.
    pub fn sign_digest(&self, mode: SignMode<'_>, hash: &[u8]) -> Result<Signature, Error> {
        let d = self.secret()?;
        sign_with(&self.group, d.expose(), hash, mode)
    }

    /// Verifies a DER-encoded signature over `hash`.
    ///
    /// A valid signature followed by extra bytes is reported as
    /// [`Error::SigLenMismatch`]; an invalid one as [`Error::VerifyFailed`].
    pub fn read_signature(&self, hash: &[u8], sig: &[u8]) -> Result<(), Error> {
        let (signature, consumed) = Signature::parse_der(sig)?;
        verify(&self.group, hash, &self.q, &signature)?;
        if consumed != sig.len() {
            return Err(Error::SigLenMismatch);
        }
        Ok(())
    }

    /// Hashes `msg` with `alg` and signs it deterministically.
    pub fn sign_message(&self, alg: HashAlgorithm, msg: &[u8]) -> Result<Vec<u8>, Error> {
        self.write_signature(SignMode::Deterministic(alg), &alg.digest(msg))
    }

    /// Hashes `msg` with `alg` and verifies a DER signature over it.
    pub fn verify_message(&self, alg: HashAlgorithm, msg: &[u8], sig: &[u8]) -> Result<(), Error> {
        self.read_signature(&alg.digest(msg), sig)
    }
}

impl From<&EcKeypair> for EcdsaContext {
    fn from(keypair: &EcKeypair) -> Self {
        Self::from_keypair(keypair)
    }
}
