use super::*;
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::One;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn scalar(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

// RFC 6979, A.2.5
const P256_KEY: [u8; 32] = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

#[test]
fn test_rfc6979_p256_sha256() {
    let group = EcGroup::load(CurveId::Secp256r1).unwrap();
    let d = scalar(&P256_KEY);
    let q = group.mul_generator(&d).unwrap();

    let cases = [
        (
            &b"sample"[..],
            hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"),
            hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"),
        ),
        (
            &b"test"[..],
            hex!("f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367"),
            hex!("019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083"),
        ),
    ];

    for (msg, r, s) in cases {
        let digest = HashAlgorithm::Sha256.digest(msg);
        let sig = sign_deterministic(&group, &d, &digest, HashAlgorithm::Sha256).unwrap();
        assert_eq!(sig, Signature::new(scalar(&r), scalar(&s)));
        assert!(verify(&group, &digest, &q, &sig).is_ok());
    }
}

#[test]
fn test_rfc6979_p521_sha512() {
    // RFC 6979, A.2.7: the 521-bit order exercises the bit truncation
    let group = EcGroup::load(CurveId::Secp521r1).unwrap();
    let d = scalar(&hex!(
        "00fad06daa62ba3b25d2fb40133da757205de67f5bb0018fee8c86e1b68c7e75ca"
        "a896eb32f1f47c70855836a6d16fcc1466f6d8fbec67db89ec0c08b0e996b83538"
    ));
    let digest = HashAlgorithm::Sha512.digest(b"sample");

    let sig = sign_deterministic(&group, &d, &digest, HashAlgorithm::Sha512).unwrap();
    assert_eq!(
        sig.r,
        scalar(&hex!(
            "00c328fafcbd79dd77850370c46325d987cb525569fb63c5d3bc53950e6d4c5f17"
            "4e25a1ee9017b5d450606add152b534931d7d4e8455cc91f9b15bf05ec36e377fa"
        ))
    );
    assert_eq!(
        sig.s,
        scalar(&hex!(
            "00617cce7cf5064806c467f678d3b4080d6f1cc50af26ca209417308281b68af28"
            "2623eaa63e5b5c0723d8b8c37ff0777b1a20f8ccb1dccc43997f1ee0e44da4a67a"
        ))
    );
}

#[test]
fn test_unit_key_on_p256() {
    // d = 1, Q = G
    let mut rng = StdRng::seed_from_u64(42);
    let group = EcGroup::load(CurveId::Secp256r1).unwrap();
    let d = BigUint::one();
    let q = group.generator().clone();
    let mut digest = HashAlgorithm::Sha256.digest(b"test");

    let sig = sign(&group, &d, &digest, &mut rng).unwrap();
    assert_eq!(verify(&group, &digest, &q, &sig), Ok(()));

    let last = digest.len() - 1;
    digest[last] ^= 0xff;
    assert_eq!(verify(&group, &digest, &q, &sig), Err(Error::VerifyFailed));
}

#[test]
fn test_all_curves_sign_verify_der() {
    let mut rng = StdRng::seed_from_u64(42);
    for id in CurveId::SUPPORTED {
        let ctx = EcdsaContext::generate(id, &mut rng).unwrap();
        for alg in HashAlgorithm::ALL {
            let digest = alg.digest(id.name().as_bytes());

            let der = ctx
                .write_signature(SignMode::Randomized(&mut rng), &digest)
                .unwrap();
            assert!(der.len() <= max_signature_len(id.bit_size()), "{id} {alg}");
            assert_eq!(ctx.read_signature(&digest, &der), Ok(()), "{id} {alg}");

            let sig = Signature::from_der(&der).unwrap();
            assert_eq!(sig.to_der().unwrap(), der);
            assert_eq!(verify(ctx.group(), &digest, ctx.public(), &sig), Ok(()));
        }
    }
}

#[test]
fn test_deterministic_signatures() {
    let mut rng = StdRng::seed_from_u64(42);
    let ctx = EcdsaContext::generate(CurveId::Secp256k1, &mut rng).unwrap();
    let other = EcdsaContext::generate(CurveId::Secp256k1, &mut rng).unwrap();

    let a = ctx.sign_message(HashAlgorithm::Sha256, b"message").unwrap();
    let b = ctx.sign_message(HashAlgorithm::Sha256, b"message").unwrap();
    assert_eq!(a, b);

    // changing the message, the hash or the key changes the signature
    assert_ne!(a, ctx.sign_message(HashAlgorithm::Sha256, b"messagf").unwrap());
    assert_ne!(a, ctx.sign_message(HashAlgorithm::Sha512, b"message").unwrap());
    assert_ne!(a, other.sign_message(HashAlgorithm::Sha256, b"message").unwrap());

    assert_eq!(ctx.verify_message(HashAlgorithm::Sha256, b"message", &a), Ok(()));
    assert_eq!(
        other.verify_message(HashAlgorithm::Sha256, b"message", &a),
        Err(Error::VerifyFailed)
    );
}

#[test]
fn test_tampered_der_is_rejected() {
    let mut rng = StdRng::seed_from_u64(17);
    let ctx = EcdsaContext::generate(CurveId::Secp256r1, &mut rng).unwrap();
    let digest = HashAlgorithm::Sha256.digest(b"tamper");
    let der = ctx
        .write_signature(SignMode::Deterministic(HashAlgorithm::Sha256), &digest)
        .unwrap();

    // flip one bit in the last content byte of r and of s
    let r_len = der[3] as usize;
    for index in [3 + r_len, der.len() - 1] {
        let mut tampered = der.clone();
        tampered[index] ^= 0x01;
        assert_eq!(
            ctx.read_signature(&digest, &tampered),
            Err(Error::VerifyFailed)
        );
    }
}

#[test]
fn test_der_length_errors() {
    let group = EcGroup::load(CurveId::Secp256r1).unwrap();
    let d = scalar(&P256_KEY);
    let q = group.mul_generator(&d).unwrap();
    let ctx = EcdsaContext::verify_only(group.clone(), q).unwrap();

    let digest = HashAlgorithm::Sha256.digest(b"sample");
    let der = sign_deterministic(&group, &d, &digest, HashAlgorithm::Sha256)
        .unwrap()
        .to_der()
        .unwrap();
    assert_eq!(ctx.read_signature(&digest, &der), Ok(()));

    let mut trailing = der.clone();
    trailing.push(0x00);
    assert_eq!(ctx.read_signature(&digest, &trailing), Err(Error::SigLenMismatch));

    let mut short_len = der.clone();
    short_len[1] -= 1;
    let err = ctx.read_signature(&digest, &short_len).unwrap_err();
    assert_eq!(err, Error::Asn1(Asn1Error::LengthMismatch));
    assert_eq!(err.code(), -0x4FE6);

    // a SEQUENCE too short for s is a length error even with bytes after it
    let mut short_then_trailing = der.clone();
    short_then_trailing[1] -= 3;
    short_then_trailing.push(0x00);
    assert_eq!(
        ctx.read_signature(&digest, &short_then_trailing),
        Err(Error::Asn1(Asn1Error::LengthMismatch))
    );
}

#[test]
fn test_group_without_order_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let group = EcGroup::from_parameters(
        BigUint::from(97u32),
        BigUint::from(2u32),
        BigUint::from(3u32),
        BigUint::from(3u32),
        BigUint::from(6u32),
        None,
    )
    .unwrap();
    let g = group.generator().clone();
    let sig = Signature::new(BigUint::one(), BigUint::one());

    assert_eq!(sign(&group, &BigUint::one(), &[0u8; 4], &mut rng), Err(Error::BadInput));
    assert_eq!(verify(&group, &[0u8; 4], &g, &sig), Err(Error::BadInput));
}

#[test]
fn test_drbg_output_matches_deterministic_nonce() {
    // the first scalar drawn from a DRBG seeded with d || e is the nonce k
    let group = EcGroup::load(CurveId::Secp256r1).unwrap();
    let digest = HashAlgorithm::Sha256.digest(b"sample");
    let e = derive_scalar(&group, &digest).unwrap();

    let mut seed = P256_KEY.to_vec();
    let mut e_bytes = vec![0u8; 32];
    let raw = e.to_bytes_be();
    e_bytes[32 - raw.len()..].copy_from_slice(&raw);
    seed.extend_from_slice(&e_bytes);

    let mut drbg = HmacDrbg::from_seed(HashAlgorithm::Sha256, &seed).unwrap();
    let mut k = [0u8; 32];
    drbg.generate(&mut k).unwrap();
    assert_eq!(
        k,
        hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60")
    );
}
