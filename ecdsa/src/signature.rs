//! ECDSA signature values and their DER encoding.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::asn1::{DerReader, DerWriter};
use crate::constants::{TAG_SEQUENCE, max_signature_len};
use crate::errors::{Asn1Error, Error};

/// An ECDSA signature `(r, s)`.
///
/// The wire form is
///
/// ```text
/// Ecdsa-Sig-Value ::= SEQUENCE {
///     r INTEGER,
///     s INTEGER }
/// ```
///
/// Decoding does not check that `r` and `s` are in range for any particular
/// curve; verification does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Upper bound on the encoded size of this signature.
    fn encoded_len_bound(&self) -> usize {
        let bits = self.r.bits().max(self.s.bits()) as usize;
        max_signature_len(bits)
    }

    /// Encodes the signature into the start of `out` and returns the number of
    /// bytes written, or [`Error::BufferTooSmall`] if `out` cannot hold it.
    /// Nothing is written to `out` on failure.
    pub fn write_der(&self, out: &mut [u8]) -> Result<usize, Error> {
        let mut scratch = vec![0u8; self.encoded_len_bound()];
        let mut writer = DerWriter::new(&mut scratch);

        let mut len = writer.write_integer(&self.s)?;
        len += writer.write_integer(&self.r)?;
        len += writer.write_len(len)?;
        len += writer.write_tag(TAG_SEQUENCE)?;

        if out.len() < len {
            return Err(Error::BufferTooSmall);
        }
        out[..len].copy_from_slice(writer.written());
        Ok(len)
    }

    /// Encodes the signature into a new vector.
    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        let mut out = vec![0u8; self.encoded_len_bound()];
        let len = self.write_der(&mut out)?;
        out.truncate(len);
        Ok(out)
    }

    /// Decodes a DER signature that must span all of `bytes`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, Error> {
        let (sig, consumed) = Self::parse_der(bytes)?;
        if consumed != bytes.len() {
            return Err(Error::SigLenMismatch);
        }
        Ok(sig)
    }

    /// Decodes a DER signature from the front of `bytes`, returning it with
    /// the number of bytes it occupies.
    ///
    /// Both integers must end within the declared SEQUENCE
    /// ([`Asn1Error::LengthMismatch`] otherwise). Bytes left over after `s`,
    /// inside or after the SEQUENCE, are reported through the returned
    /// length for the caller to judge.
    pub(crate) fn parse_der(bytes: &[u8]) -> Result<(Self, usize), Error> {
        let mut reader = DerReader::new(bytes);
        let declared = reader.read_tag(TAG_SEQUENCE)?;
        let seq_end = reader.position() + declared;

        let read_member = |reader: &mut DerReader<'_>| -> Result<BigUint, Error> {
            let value = reader.read_integer()?;
            if reader.position() > seq_end {
                return Err(Asn1Error::LengthMismatch.into());
            }
            Ok(value)
        };
        let r = read_member(&mut reader)?;
        let s = read_member(&mut reader)?;

        Ok((Self { r, s }, reader.position()))
    }
}
