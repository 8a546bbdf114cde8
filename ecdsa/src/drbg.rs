//! HMAC_DRBG (NIST SP 800-90A) without an entropy source.
//!
//! Instantiated from a caller-provided seed, the generator is fully
//! deterministic. Seeded with `d || e` it yields the nonce sequence of
//! RFC 6979, which is how deterministic signatures are produced.

use rand::{TryCryptoRng, TryRngCore};
use tracing::trace;
use zeroize::Zeroizing;

use crate::constants::{DRBG_MAX_INPUT, DRBG_MAX_REQUEST, DRBG_MAX_SEED_INPUT, DRBG_RESEED_INTERVAL};
use crate::errors::{DrbgError, Error};
use crate::hash::HashAlgorithm;

/// Deterministic random bit generator built on HMAC.
///
/// The working state `(K, V)` is wiped when the generator is dropped.
pub struct HmacDrbg {
    alg: HashAlgorithm,
    key: Zeroizing<Vec<u8>>,
    value: Zeroizing<Vec<u8>>,
    reseed_counter: u64,
}

impl HmacDrbg {
    /// Instantiates the generator from `seed`.
    pub fn from_seed(alg: HashAlgorithm, seed: &[u8]) -> Result<Self, Error> {
        if seed.len() > DRBG_MAX_SEED_INPUT {
            return Err(DrbgError::InputTooBig.into());
        }

        let md_size = alg.output_size();
        let mut drbg = Self {
            alg,
            key: Zeroizing::new(vec![0x00; md_size]),
            value: Zeroizing::new(vec![0x01; md_size]),
            reseed_counter: 1,
        };
        drbg.update(seed)?;
        Ok(drbg)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.alg
    }

    /// Mixes `data` into the state. An empty update runs a single round.
    fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        let rounds: &[u8] = if data.is_empty() { &[0x00] } else { &[0x00, 0x01] };
        for sep in rounds {
            self.key = self
                .alg
                .hmac(&self.key, &[self.value.as_slice(), &[*sep], data])?;
            self.value = self.alg.hmac(&self.key, &[self.value.as_slice()])?;
        }
        Ok(())
    }

    /// Fills `out` with pseudo-random bytes.
    pub fn generate(&mut self, out: &mut [u8]) -> Result<(), Error> {
        self.generate_with_additional(out, &[])
    }

    /// Fills `out` after mixing `additional` into the state.
    pub fn generate_with_additional(
        &mut self,
        out: &mut [u8],
        additional: &[u8],
    ) -> Result<(), Error> {
        if out.len() > DRBG_MAX_REQUEST {
            return Err(DrbgError::RequestTooBig.into());
        }
        if additional.len() > DRBG_MAX_INPUT {
            return Err(DrbgError::InputTooBig.into());
        }
        if self.reseed_counter > DRBG_RESEED_INTERVAL {
            return Err(DrbgError::ReseedRequired.into());
        }

        if !additional.is_empty() {
            self.update(additional)?;
        }

        for chunk in out.chunks_mut(self.alg.output_size()) {
            self.value = self.alg.hmac(&self.key, &[self.value.as_slice()])?;
            chunk.copy_from_slice(&self.value[..chunk.len()]);
        }

        self.update(additional)?;
        self.reseed_counter += 1;
        trace!(len = out.len(), counter = self.reseed_counter, "hmac_drbg generate");
        Ok(())
    }
}

impl TryRngCore for HmacDrbg {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.generate(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.generate(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        for chunk in dst.chunks_mut(DRBG_MAX_REQUEST) {
            self.generate(chunk)?;
        }
        Ok(())
    }
}

impl TryCryptoRng for HmacDrbg {}
