//! Secret scalar wrapper.

use core::fmt::{self, Debug, Formatter};

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret scalar (private key, nonce, blinding factor).
///
/// The digits are overwritten when the value is dropped, on success and error
/// paths alike, and `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretScalar(BigUint);

impl SecretScalar {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Borrow the underlying integer.
    #[inline]
    pub fn expose(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for SecretScalar {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl Zeroize for SecretScalar {
    fn zeroize(&mut self) {
        // assign_from_slice reuses the digit buffer, so writing as many zero
        // digits as the value holds overwrites it in place.
        let digits = self.0.iter_u32_digits().len();
        self.0.assign_from_slice(&vec![0u32; digits]);
    }
}

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretScalar {}

impl Debug for SecretScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar([REDACTED])")
    }
}
