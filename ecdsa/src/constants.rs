//! Constants used by the ECDSA engine.

/// Attempts allowed for the whole signing procedure before giving up on an
/// `s == 0` result.
pub const MAX_SIGN_TRIES: usize = 10;

/// Attempts allowed for drawing an ephemeral keypair whose `r` is non-zero.
pub const MAX_KEY_TRIES: usize = 10;

/// Attempts allowed for drawing the blinding factor `t` in `[1, N-1]`.
///
/// Each ephemeral scalar draw is bounded the same way.
pub const MAX_BLIND_TRIES: usize = curve::MAX_SCALAR_TRIES;

/// ASN.1 universal tag of an INTEGER.
pub(crate) const TAG_INTEGER: u8 = 0x02;

/// ASN.1 tag of a constructed SEQUENCE.
pub(crate) const TAG_SEQUENCE: u8 = 0x30;

/// Largest DER length field accepted on decode, in bytes after the `0x8N`
/// prefix.
pub(crate) const MAX_LENGTH_OCTETS: usize = 4;

/// Largest single request served by the HMAC_DRBG, in bytes.
pub const DRBG_MAX_REQUEST: usize = 1024;

/// Largest additional input accepted per HMAC_DRBG request, in bytes.
pub const DRBG_MAX_INPUT: usize = 256;

/// Largest seed material accepted when instantiating the HMAC_DRBG.
pub const DRBG_MAX_SEED_INPUT: usize = 384;

/// Number of requests served before the HMAC_DRBG refuses to continue.
pub const DRBG_RESEED_INTERVAL: u64 = 10_000;

const fn der_header_len(content_len: usize) -> usize {
    if content_len < 0x80 {
        2
    } else if content_len <= 0xFF {
        3
    } else if content_len <= 0xFFFF {
        4
    } else if content_len <= 0xFF_FFFF {
        5
    } else {
        6
    }
}

/// Upper bound on the DER encoding of a signature whose components have at
/// most `bits` bits.
///
/// Each INTEGER needs `bits / 8 + 1` content bytes (the extra byte covers the
/// sign padding) and the SEQUENCE wraps two of them. For the supported curve
/// sizes this is `2 or 3` header bytes plus `2 * (2 or 3 + bits / 8 + 1)`.
pub const fn max_signature_len(bits: usize) -> usize {
    let int_content = bits / 8 + 1;
    let int_len = der_header_len(int_content) + int_content;
    let seq_content = 2 * int_len;
    der_header_len(seq_content) + seq_content
}

/// Largest DER signature produced on any supported curve (secp521r1).
pub const MAX_SIGNATURE_LEN: usize = max_signature_len(521);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_signature_len() {
        assert_eq!(max_signature_len(192), 56);
        assert_eq!(max_signature_len(256), 72);
        assert_eq!(max_signature_len(384), 104);
        assert_eq!(MAX_SIGNATURE_LEN, 139);
    }

    #[test]
    fn test_sequence_header_grows_with_content() {
        // 61-byte scalars push the SEQUENCE content past 127 bytes
        assert_eq!(max_signature_len(487), 2 + 2 * (2 + 61));
        assert_eq!(max_signature_len(488), 3 + 2 * (2 + 62));
        // 127-byte scalars need a long-form INTEGER length as well
        assert_eq!(max_signature_len(1016), 4 + 2 * (3 + 128));
    }
}
