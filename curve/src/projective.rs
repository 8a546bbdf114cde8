use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::AffinePoint;
use crate::errors::Error;
use crate::group::EcGroup;

/// Point in Jacobian coordinates (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented with Z = 0.
///
/// Jacobian points are working values only: scalar multiplication runs in
/// Jacobian form and normalizes once at the end.
#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl JacobianPoint {
    /// The point at infinity: (1:1:0)
    pub fn identity() -> Self {
        JacobianPoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &AffinePoint) -> Self {
        if point.is_identity() {
            return Self::identity();
        }

        JacobianPoint {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self, group: &EcGroup) -> Result<AffinePoint, Error> {
        if self.is_identity() {
            return Ok(AffinePoint::identity());
        }

        let fp = &group.fp;
        let z_inv = fp.inv(&self.z)?;
        let z_inv2 = fp.square(&z_inv);
        let z_inv3 = fp.mul(&z_inv2, &z_inv);
        let x = fp.mul(&self.x, &z_inv2);
        let y = fp.mul(&self.y, &z_inv3);

        Ok(AffinePoint::new(x, y))
    }

    /// Point doubling: 2*P ("dbl-1998-cmo-2", valid for any `a`).
    pub fn double(&self, group: &EcGroup) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }

        let fp = &group.fp;
        let xx = fp.square(&self.x);
        let yy = fp.square(&self.y);
        let yyyy = fp.square(&yy);
        let zz = fp.square(&self.z);

        // S = 4*X*YY
        let s = fp.mul_small(&fp.mul(&self.x, &yy), 4);
        // M = 3*XX + a*ZZ^2
        let m = fp.add(&fp.mul_small(&xx, 3), &fp.mul(&group.a, &fp.square(&zz)));

        // X3 = M^2 - 2*S
        let x3 = fp.sub(&fp.square(&m), &fp.double(&s));
        // Y3 = M*(S - X3) - 8*YYYY
        let y3 = fp.sub(&fp.mul(&m, &fp.sub(&s, &x3)), &fp.mul_small(&yyyy, 8));
        // Z3 = 2*Y*Z
        let z3 = fp.double(&fp.mul(&self.y, &self.z));

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition ("add-1998-cmo-2"), falling back to doubling when both
    /// inputs are the same point.
    pub fn add(&self, other: &Self, group: &EcGroup) -> Self {
        // Handle infinity cases
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let fp = &group.fp;
        let z1z1 = fp.square(&self.z);
        let z2z2 = fp.square(&other.z);
        let u1 = fp.mul(&self.x, &z2z2);
        let u2 = fp.mul(&other.x, &z1z1);
        let s1 = fp.mul(&fp.mul(&self.y, &other.z), &z2z2);
        let s2 = fp.mul(&fp.mul(&other.y, &self.z), &z1z1);

        if u1 == u2 {
            if s1 == s2 {
                return self.double(group);
            }
            // Points are inverses
            return Self::identity();
        }

        let h = fp.sub(&u2, &u1);
        let r = fp.sub(&s2, &s1);
        let hh = fp.square(&h);
        let hhh = fp.mul(&h, &hh);
        let v = fp.mul(&u1, &hh);

        // X3 = r^2 - HHH - 2*V
        let x3 = fp.sub(&fp.sub(&fp.square(&r), &hhh), &fp.double(&v));
        // Y3 = r*(V - X3) - S1*HHH
        let y3 = fp.sub(&fp.mul(&r, &fp.sub(&v, &x3)), &fp.mul(&s1, &hhh));
        // Z3 = Z1*Z2*H
        let z3 = fp.mul(&fp.mul(&self.z, &other.z), &h);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveId;

    #[test]
    fn test_roundtrip_through_affine() {
        let group = EcGroup::load(CurveId::Secp224r1).unwrap();
        let g = group.generator();
        let jac = JacobianPoint::from_affine(g);
        assert_eq!(&jac.to_affine(&group).unwrap(), g);
    }

    #[test]
    fn test_double_matches_add() {
        let group = EcGroup::load(CurveId::Secp192r1).unwrap();
        let g = JacobianPoint::from_affine(group.generator());
        let doubled = g.double(&group).to_affine(&group).unwrap();
        let added = g.add(&g, &group).to_affine(&group).unwrap();
        assert_eq!(doubled, added);
        assert!(group.is_on_curve(&doubled));
    }

    #[test]
    fn test_mixed_z_addition() {
        // 2G (with Z != 1) + G must equal 3G computed from affine inputs
        let group = EcGroup::load(CurveId::Secp256r1).unwrap();
        let g = JacobianPoint::from_affine(group.generator());
        let g2 = g.double(&group);
        let g3 = g2.add(&g, &group).to_affine(&group).unwrap();

        let g2_affine = JacobianPoint::from_affine(&g2.to_affine(&group).unwrap());
        let expected = g2_affine.add(&g, &group).to_affine(&group).unwrap();
        assert_eq!(g3, expected);
        assert!(group.is_on_curve(&g3));
    }

    #[test]
    fn test_identity_handling() {
        let group = EcGroup::load(CurveId::Secp256k1).unwrap();
        let inf = JacobianPoint::identity();
        assert!(inf.double(&group).is_identity());
        assert!(inf.add(&inf, &group).is_identity());
        assert_eq!(inf.to_affine(&group).unwrap(), AffinePoint::identity());
    }
}
