//! Signature verification.

use curve::{AffinePoint, EcGroup};
use num_traits::Zero;
use tracing::debug;

use crate::derive::derive_scalar;
use crate::errors::Error;
use crate::signature::Signature;

/// Checks `sig` over `digest` against the public point `q`.
///
/// Any failed check on the signature itself is reported as
/// [`Error::VerifyFailed`]. An invalid public point is reported as
/// [`Error::InvalidKey`], and a group without an order as
/// [`Error::BadInput`].
pub fn verify(
    group: &EcGroup,
    digest: &[u8],
    q: &AffinePoint,
    sig: &Signature,
) -> Result<(), Error> {
    let n = group.scalar_field()?;
    let Signature { r, s } = sig;

    if r.is_zero() || !n.contains(r) || s.is_zero() || !n.contains(s) {
        debug!("signature component out of range");
        return Err(Error::VerifyFailed);
    }

    group.check_pubkey(q)?;

    let e = derive_scalar(group, digest)?;
    let s_inv = n.inv(s)?;
    let u1 = n.mul(&e, &s_inv);
    let u2 = n.mul(r, &s_inv);

    // R = u1*G + u2*Q; all inputs are public
    let point = group.muladd(&u1, group.generator(), &u2, q)?;
    if point.is_identity() {
        debug!("u1*G + u2*Q is the identity");
        return Err(Error::VerifyFailed);
    }

    if &n.reduce(&point.x) != r {
        debug!("R.x mod N does not match r");
        return Err(Error::VerifyFailed);
    }

    Ok(())
}
