//! Signature generation.

use curve::{EcGroup, RandomSource, SecretScalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryRngCore;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::constants::{MAX_KEY_TRIES, MAX_SIGN_TRIES};
use crate::derive::{derive_scalar, to_fixed_be};
use crate::drbg::HmacDrbg;
use crate::errors::Error;
use crate::hash::HashAlgorithm;
use crate::signature::Signature;

/// Where the per-signature nonce comes from.
pub enum SignMode<'a> {
    /// Draw nonces from the caller's random source.
    Randomized(&'a mut dyn RandomSource),
    /// Derive nonces from the key and digest with HMAC_DRBG over the given
    /// hash (RFC 6979).
    Deterministic(HashAlgorithm),
}

/// Signs `digest` with the private scalar `d` in the given mode.
pub fn sign_with(
    group: &EcGroup,
    d: &BigUint,
    digest: &[u8],
    mode: SignMode<'_>,
) -> Result<Signature, Error> {
    match mode {
        SignMode::Randomized(rng) => sign(group, d, digest, rng),
        SignMode::Deterministic(alg) => sign_deterministic(group, d, digest, alg),
    }
}

/// Signs `digest` with a nonce drawn from `rng`.
///
/// `d` must be in `[1, N-1]`. Gives up with [`Error::RandomFailed`] when the
/// random source keeps producing degenerate values.
pub fn sign<R: RandomSource + ?Sized>(
    group: &EcGroup,
    d: &BigUint,
    digest: &[u8],
    rng: &mut R,
) -> Result<Signature, Error> {
    let n = group.scalar_field()?;
    group.check_privkey(d)?;

    for attempt in 1..=MAX_SIGN_TRIES {
        let (k, r) = ephemeral_key(group, rng)?;
        let e = derive_scalar(group, digest)?;
        let t = group.random_scalar(rng)?;

        // s = (e + r*d) * t * (k*t)^-1, so that k is never inverted alone
        let blinded = SecretScalar::new(n.mul(&n.add(&e, &n.mul(&r, d)), t.expose()));
        let kt = SecretScalar::new(n.mul(k.expose(), t.expose()));
        let kt_inv = SecretScalar::new(n.inv(kt.expose())?);
        let s = n.mul(blinded.expose(), kt_inv.expose());

        if !s.is_zero() {
            return Ok(Signature::new(r, s));
        }
        debug!(attempt, "s is zero, restarting signature");
    }

    warn!(tries = MAX_SIGN_TRIES, "signing gave up");
    Err(Error::RandomFailed)
}

/// Draws `k` and returns it with `r = (kG).x mod N`, retrying while `r` is zero.
fn ephemeral_key<R: RandomSource + ?Sized>(
    group: &EcGroup,
    rng: &mut R,
) -> Result<(SecretScalar, BigUint), Error> {
    let n = group.scalar_field()?;

    for attempt in 1..=MAX_KEY_TRIES {
        let (k, point) = group.generate_keypair(rng)?;
        let r = n.reduce(&point.x);
        if !r.is_zero() {
            return Ok((k, r));
        }
        debug!(attempt, "ephemeral key gave r = 0");
    }

    warn!(tries = MAX_KEY_TRIES, "ephemeral key generation gave up");
    Err(Error::RandomFailed)
}

/// Signs `digest` with a nonce derived from `d` and `digest` (RFC 6979).
///
/// The same key, digest and hash always give the same signature.
pub fn sign_deterministic(
    group: &EcGroup,
    d: &BigUint,
    digest: &[u8],
    alg: HashAlgorithm,
) -> Result<Signature, Error> {
    group.check_privkey(d)?;
    let n_size = group.n_size();

    let mut seed = Zeroizing::new(Vec::with_capacity(2 * n_size));
    seed.extend_from_slice(&to_fixed_be(d, n_size)?);
    seed.extend_from_slice(&to_fixed_be(&derive_scalar(group, digest)?, n_size)?);

    let mut drbg = HmacDrbg::from_seed(alg, &seed)?;
    sign_with_drbg(group, d, digest, &mut drbg)
}

/// Runs the signing loop on `drbg`. A DRBG failure comes back as
/// [`Error::Drbg`] rather than as a generic random source error.
fn sign_with_drbg(
    group: &EcGroup,
    d: &BigUint,
    digest: &[u8],
    drbg: &mut HmacDrbg,
) -> Result<Signature, Error> {
    let mut source = DrbgSource {
        drbg,
        failure: None,
    };
    sign(group, d, digest, &mut source).map_err(|err| source.failure.take().unwrap_or(err))
}

/// Hands the DRBG to the scalar sampler and keeps the error it reports.
struct DrbgSource<'a> {
    drbg: &'a mut HmacDrbg,
    failure: Option<Error>,
}

impl RandomSource for DrbgSource<'_> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), curve::Error> {
        self.drbg.try_fill_bytes(dest).map_err(|err| {
            let msg = err.to_string();
            self.failure = Some(err);
            curve::Error::RandomSource(msg)
        })
    }
}
