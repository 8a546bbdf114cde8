//! Keypairs bound to a curve group.

use num_bigint::BigUint;

use crate::affine::AffinePoint;
use crate::curves::CurveId;
use crate::errors::Error;
use crate::group::EcGroup;
use crate::random::RandomSource;
use crate::secret::SecretScalar;

/// A private scalar `d` and its public point `Q = d*G` on a given group.
///
/// Both halves are validated on construction, so a keypair always satisfies
/// `1 <= d < N` and `Q = d*G`. The private scalar is zeroized on drop.
#[derive(Clone, Debug)]
pub struct EcKeypair {
    group: EcGroup,
    d: SecretScalar,
    q: AffinePoint,
}

impl EcKeypair {
    /// Loads the named curve and generates a fresh keypair on it.
    pub fn generate<R: RandomSource + ?Sized>(id: CurveId, rng: &mut R) -> Result<Self, Error> {
        let group = EcGroup::load(id)?;
        let (d, q) = group.generate_keypair(rng)?;
        Ok(Self { group, d, q })
    }

    /// Assembles a keypair from existing parts, checking that they belong
    /// together.
    pub fn from_parts(group: EcGroup, d: BigUint, q: AffinePoint) -> Result<Self, Error> {
        let d = SecretScalar::new(d);
        group.check_privkey(d.expose())?;
        group.check_pubkey(&q)?;
        if group.mul_generator(d.expose())? != q {
            return Err(Error::InvalidKey);
        }
        Ok(Self { group, d, q })
    }

    /// Derives the public point from a private scalar.
    pub fn from_secret(group: EcGroup, d: BigUint) -> Result<Self, Error> {
        let d = SecretScalar::new(d);
        let q = group.mul_generator(d.expose())?;
        Ok(Self { group, d, q })
    }

    #[inline]
    pub fn group(&self) -> &EcGroup {
        &self.group
    }

    #[inline]
    pub fn secret(&self) -> &SecretScalar {
        &self.d
    }

    #[inline]
    pub fn public(&self) -> &AffinePoint {
        &self.q
    }
}
