//! Hash algorithms usable for message digests and deterministic nonces.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Digest;
use zeroize::Zeroizing;

use crate::errors::Error;

/// A SHA-2 hash function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

macro_rules! hmac_over {
    ($hash:ty, $key:expr, $parts:expr) => {{
        let mut mac = <Hmac<$hash> as Mac>::new_from_slice($key).map_err(|_| Error::BadInput)?;
        for part in $parts {
            Mac::update(&mut mac, part);
        }
        Zeroizing::new(mac.finalize().into_bytes().to_vec())
    }};
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Digest size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }

    /// Looks up an algorithm by name, ignoring case and an optional dash
    /// (`sha256`, `SHA-256`). Unknown names give [`Error::BadInput`].
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let normalized = name.replace('-', "").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or(Error::BadInput)
    }

    /// Hashes `msg`.
    pub fn digest(self, msg: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha224 => sha2::Sha224::digest(msg).to_vec(),
            HashAlgorithm::Sha256 => sha2::Sha256::digest(msg).to_vec(),
            HashAlgorithm::Sha384 => sha2::Sha384::digest(msg).to_vec(),
            HashAlgorithm::Sha512 => sha2::Sha512::digest(msg).to_vec(),
        }
    }

    /// HMAC keyed with `key` over the concatenation of `parts`.
    pub(crate) fn hmac(self, key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>, Error> {
        Ok(match self {
            HashAlgorithm::Sha224 => hmac_over!(sha2::Sha224, key, parts),
            HashAlgorithm::Sha256 => hmac_over!(sha2::Sha256, key, parts),
            HashAlgorithm::Sha384 => hmac_over!(sha2::Sha384, key, parts),
            HashAlgorithm::Sha512 => hmac_over!(sha2::Sha512, key, parts),
        })
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
