//! Minimal DER reader and writer for INTEGER and SEQUENCE elements.
//!
//! The writer fills a buffer from its end towards its start, so nested
//! elements are written content first and their headers prepended once the
//! content length is known.

use num_bigint::BigUint;

use crate::constants::{MAX_LENGTH_OCTETS, TAG_INTEGER};
use crate::errors::Asn1Error;

/// Writes DER elements backwards into a fixed buffer.
pub(crate) struct DerWriter<'a> {
    buf: &'a mut [u8],
    // start of the bytes written so far
    pos: usize,
}

impl<'a> DerWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        let pos = buf.len();
        Self { buf, pos }
    }

    /// The encoded bytes, in order.
    pub fn written(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<usize, Asn1Error> {
        if bytes.len() > self.pos {
            return Err(Asn1Error::BufTooSmall);
        }
        self.pos -= bytes.len();
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    pub fn write_len(&mut self, len: usize) -> Result<usize, Asn1Error> {
        if len < 0x80 {
            return self.write_raw(&[len as u8]);
        }

        let be = len.to_be_bytes();
        let skip = be.iter().take_while(|b| **b == 0).count();
        let octets = &be[skip..];
        if octets.len() > MAX_LENGTH_OCTETS {
            return Err(Asn1Error::InvalidLength);
        }
        let written = self.write_raw(octets)?;
        Ok(written + self.write_raw(&[0x80 | octets.len() as u8])?)
    }

    pub fn write_tag(&mut self, tag: u8) -> Result<usize, Asn1Error> {
        self.write_raw(&[tag])
    }

    /// Writes a non-negative INTEGER in minimal form, with a leading zero
    /// byte when the top bit would otherwise read as a sign.
    pub fn write_integer(&mut self, value: &BigUint) -> Result<usize, Asn1Error> {
        let bytes = value.to_bytes_be();
        let mut len = self.write_raw(&bytes)?;
        if bytes[0] & 0x80 != 0 {
            len += self.write_raw(&[0x00])?;
        }
        len += self.write_len(len)?;
        len += self.write_tag(TAG_INTEGER)?;
        Ok(len)
    }
}

/// Reads DER elements from the front of a byte slice.
pub(crate) struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    fn read_byte(&mut self) -> Result<u8, Asn1Error> {
        let byte = *self.input.get(self.pos).ok_or(Asn1Error::OutOfData)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a length field; the length must fit in the remaining input.
    pub fn read_len(&mut self) -> Result<usize, Asn1Error> {
        let first = self.read_byte()?;
        let len = if first & 0x80 == 0 {
            first as usize
        } else {
            let octets = (first & 0x7F) as usize;
            if octets == 0 || octets > MAX_LENGTH_OCTETS {
                return Err(Asn1Error::InvalidLength);
            }
            let mut len = 0usize;
            for _ in 0..octets {
                len = (len << 8) | self.read_byte()? as usize;
            }
            len
        };

        if len > self.remaining() {
            return Err(Asn1Error::OutOfData);
        }
        Ok(len)
    }

    /// Reads the header of an element with the given tag and returns its
    /// content length.
    pub fn read_tag(&mut self, tag: u8) -> Result<usize, Asn1Error> {
        if self.remaining() < 1 {
            return Err(Asn1Error::OutOfData);
        }
        if self.input[self.pos] != tag {
            return Err(Asn1Error::UnexpectedTag);
        }
        self.pos += 1;
        self.read_len()
    }

    /// Reads a non-negative INTEGER. Empty and negative integers are
    /// rejected.
    pub fn read_integer(&mut self) -> Result<BigUint, Asn1Error> {
        let len = self.read_tag(TAG_INTEGER)?;
        let content = &self.input[self.pos..self.pos + len];
        match content.first() {
            None => return Err(Asn1Error::InvalidData),
            Some(byte) if byte & 0x80 != 0 => return Err(Asn1Error::InvalidData),
            Some(_) => {}
        }
        self.pos += len;
        Ok(BigUint::from_bytes_be(content))
    }
}
