//! Arithmetic modulo an odd prime.
//!
//! The same type serves the base field of a curve (modulo `p`) and the scalar
//! field of its prime-order subgroup (modulo `N`). Operands are expected to be
//! reduced, i.e. in `[0, modulus)`; every result is reduced as well.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::Error;

/// Prime field `Z/mZ` for an odd prime `m`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    // m - 2, the Fermat inversion exponent
    inv_exp: BigUint,
}

impl PrimeField {
    /// Creates the field for `modulus`. The modulus must be an odd number
    /// greater than 3; primality is the caller's responsibility.
    pub fn new(modulus: BigUint) -> Result<Self, Error> {
        if modulus <= BigUint::from(3u32) || !modulus.bit(0) {
            return Err(Error::BadInput);
        }
        let inv_exp = &modulus - BigUint::from(2u32);
        Ok(Self { modulus, inv_exp })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    #[inline]
    pub fn bits(&self) -> usize {
        self.modulus.bits() as usize
    }

    /// Whether `a` is a canonical representative.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    /// Full reduction of an arbitrary integer.
    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            (&self.modulus - b) + a
        }
    }

    #[inline]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn double(&self, a: &BigUint) -> BigUint {
        self.add(a, a)
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiplies by a small constant.
    #[inline]
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * BigUint::from(k)) % &self.modulus
    }

    /// Multiplicative inverse via Fermat's little theorem.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, Error> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        Ok(a.modpow(&self.inv_exp, &self.modulus))
    }
}
