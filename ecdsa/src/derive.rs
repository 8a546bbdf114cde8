//! Conversion of a digest into a scalar modulo the group order.

use curve::EcGroup;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::Error;

/// Interprets `digest` as an integer modulo `N`.
///
/// Only the leftmost `nbits` bits of the digest are used: at most `n_size`
/// bytes are read and any excess low bits are shifted out. The result is
/// below `2N`, so a single conditional subtraction reduces it.
pub fn derive_scalar(group: &EcGroup, digest: &[u8]) -> Result<BigUint, Error> {
    let n = group.scalar_field()?;
    let nbits = group.nbits();
    let use_size = digest.len().min(group.n_size());

    let mut x = BigUint::from_bytes_be(&digest[..use_size]);
    if use_size * 8 > nbits {
        x >>= use_size * 8 - nbits;
    }
    if !n.contains(&x) {
        x -= n.modulus();
    }
    Ok(x)
}

/// Big-endian encoding of `x` left-padded to exactly `len` bytes.
pub(crate) fn to_fixed_be(x: &BigUint, len: usize) -> Result<Zeroizing<Vec<u8>>, Error> {
    let bytes = Zeroizing::new(x.to_bytes_be());
    if bytes.len() > len {
        return Err(Error::BadInput);
    }
    let mut out = Zeroizing::new(vec![0u8; len]);
    out[len - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::CurveId;
    use num_traits::{One, Zero};

    #[test]
    fn test_short_digest_is_taken_whole() {
        let group = EcGroup::load(CurveId::Secp256r1).unwrap();
        let e = derive_scalar(&group, &[0x01, 0x02]).unwrap();
        assert_eq!(e, BigUint::from(0x0102u32));
        assert!(derive_scalar(&group, &[]).unwrap().is_zero());
    }

    #[test]
    fn test_long_digest_is_truncated() {
        let group = EcGroup::load(CurveId::Secp192r1).unwrap();
        let mut digest = vec![0u8; 64];
        digest[23] = 0x05;
        digest[24] = 0xff;
        // only the first 24 bytes count
        assert_eq!(derive_scalar(&group, &digest).unwrap(), BigUint::from(5u32));
    }

    #[test]
    fn test_reduces_once() {
        let group = EcGroup::load(CurveId::Secp256r1).unwrap();
        let n = group.order().unwrap().clone();
        let all_ones = (BigUint::one() << 256) - BigUint::one();
        let e = derive_scalar(&group, &[0xff; 32]).unwrap();
        assert_eq!(e, all_ones - &n);
        assert!(e < n);

        // N itself maps to zero
        let e = derive_scalar(&group, &n.to_bytes_be()).unwrap();
        assert!(e.is_zero());
    }

    #[test]
    fn test_excess_bits_are_shifted_out() {
        // 521-bit order: 66 bytes carry 7 bits too many
        let group = EcGroup::load(CurveId::Secp521r1).unwrap();
        let n = group.order().unwrap().clone();
        let mut digest = vec![0u8; 66];
        digest[65] = 0x80;
        assert_eq!(derive_scalar(&group, &digest).unwrap(), BigUint::one());

        let all_ones = (BigUint::one() << 521) - BigUint::one();
        assert_eq!(derive_scalar(&group, &[0xff; 66]).unwrap(), all_ones - n);
    }

    #[test]
    fn test_group_without_order() {
        let group = EcGroup::from_parameters(
            BigUint::from(97u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
            BigUint::from(3u32),
            BigUint::from(6u32),
            None,
        )
        .unwrap();
        assert_eq!(derive_scalar(&group, &[1, 2, 3]), Err(Error::BadInput));
    }

    #[test]
    fn test_to_fixed_be() {
        let padded = to_fixed_be(&BigUint::from(0x0102u32), 4).unwrap();
        assert_eq!(padded.as_slice(), &[0, 0, 1, 2]);
        assert_eq!(to_fixed_be(&BigUint::zero(), 3).unwrap().as_slice(), &[0, 0, 0]);
        assert_eq!(
            to_fixed_be(&BigUint::from(0x010203u32), 2),
            Err(Error::BadInput)
        );
    }
}
