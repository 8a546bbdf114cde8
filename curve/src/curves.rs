//! Named curve identifiers and their domain parameters.
//!
//! Parameters are taken from SEC 2 (v2.0). All curves listed in
//! [`CurveId::SUPPORTED`] are short Weierstrass curves of cofactor 1.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use hex_literal::hex;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Identifier of a named curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Secp256k1,
    /// Known identifier without short Weierstrass parameters; loading it
    /// fails with [`Error::FeatureUnavailable`].
    Curve25519,
}

impl CurveId {
    /// Curves whose parameters can be loaded.
    pub const SUPPORTED: [CurveId; 6] = [
        CurveId::Secp192r1,
        CurveId::Secp224r1,
        CurveId::Secp256r1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
        CurveId::Secp256k1,
    ];

    const ALL: [CurveId; 7] = [
        CurveId::Secp192r1,
        CurveId::Secp224r1,
        CurveId::Secp256r1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
        CurveId::Secp256k1,
        CurveId::Curve25519,
    ];

    /// Canonical lower-case name, e.g. `secp256r1`.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::Secp192r1 => "secp192r1",
            CurveId::Secp224r1 => "secp224r1",
            CurveId::Secp256r1 => "secp256r1",
            CurveId::Secp384r1 => "secp384r1",
            CurveId::Secp521r1 => "secp521r1",
            CurveId::Secp256k1 => "secp256k1",
            CurveId::Curve25519 => "x25519",
        }
    }

    /// Named curve id used by TLS (RFC 8422).
    pub const fn tls_id(self) -> u16 {
        match self {
            CurveId::Secp192r1 => 19,
            CurveId::Secp224r1 => 21,
            CurveId::Secp256r1 => 23,
            CurveId::Secp384r1 => 24,
            CurveId::Secp521r1 => 25,
            CurveId::Secp256k1 => 22,
            CurveId::Curve25519 => 29,
        }
    }

    /// Nominal curve size in bits.
    pub const fn bit_size(self) -> usize {
        match self {
            CurveId::Secp192r1 => 192,
            CurveId::Secp224r1 => 224,
            CurveId::Secp256r1 | CurveId::Secp256k1 => 256,
            CurveId::Secp384r1 => 384,
            CurveId::Secp521r1 => 521,
            CurveId::Curve25519 => 255,
        }
    }

    /// Looks up a curve by its TLS named-curve id.
    pub fn from_tls_id(tls_id: u16) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|id| id.tls_id() == tls_id)
            .ok_or(Error::FeatureUnavailable)
    }

    /// Looks up a curve by name. Accepts the SEC 2 names as well as the
    /// common NIST and X9.62 aliases, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let id = match name.to_ascii_lowercase().as_str() {
            "secp192r1" | "p-192" | "prime192v1" => CurveId::Secp192r1,
            "secp224r1" | "p-224" => CurveId::Secp224r1,
            "secp256r1" | "p-256" | "prime256v1" => CurveId::Secp256r1,
            "secp384r1" | "p-384" => CurveId::Secp384r1,
            "secp521r1" | "p-521" => CurveId::Secp521r1,
            "secp256k1" => CurveId::Secp256k1,
            "x25519" | "curve25519" => CurveId::Curve25519,
            _ => return Err(Error::FeatureUnavailable),
        };
        Ok(id)
    }

    pub(crate) fn params(self) -> Option<&'static CurveParams> {
        match self {
            CurveId::Secp192r1 => Some(&SECP192R1),
            CurveId::Secp224r1 => Some(&SECP224R1),
            CurveId::Secp256r1 => Some(&SECP256R1),
            CurveId::Secp384r1 => Some(&SECP384R1),
            CurveId::Secp521r1 => Some(&SECP521R1),
            CurveId::Secp256k1 => Some(&SECP256K1),
            CurveId::Curve25519 => None,
        }
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Big-endian domain parameters of a named curve.
pub(crate) struct CurveParams {
    pub p: &'static [u8],
    pub a: &'static [u8],
    pub b: &'static [u8],
    pub gx: &'static [u8],
    pub gy: &'static [u8],
    pub n: &'static [u8],
}

const SECP192R1: CurveParams = CurveParams {
    p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
    a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
    b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
};

const SECP224R1: CurveParams = CurveParams {
    p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
    b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
};

const SECP256R1: CurveParams = CurveParams {
    p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
};

const SECP384R1: CurveParams = CurveParams {
    p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"),
    a: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc"),
    b: &hex!("b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"),
    gx: &hex!("aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"),
    gy: &hex!("3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"),
    n: &hex!("ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"),
};

const SECP521R1: CurveParams = CurveParams {
    p: &hex!("01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
    a: &hex!("01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc"),
    b: &hex!("0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"),
    gx: &hex!("00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"),
    gy: &hex!("011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"),
    n: &hex!("01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"),
};

const SECP256K1: CurveParams = CurveParams {
    p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    a: &hex!("00"),
    b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
};
