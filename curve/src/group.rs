use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{trace, warn};
use zeroize::Zeroizing;

use crate::affine::AffinePoint;
use crate::curves::CurveId;
use crate::errors::Error;
use crate::field::PrimeField;
use crate::msm::shamir_mul_add;
use crate::projective::JacobianPoint;
use crate::random::RandomSource;
use crate::secret::SecretScalar;

/// Attempts allowed when drawing a scalar in `[1, N-1]` by rejection sampling.
pub const MAX_SCALAR_TRIES: usize = 30;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b` over
/// `GF(p)`, together with a generator `G` of a subgroup of prime order `N`.
///
/// A group is immutable once built and can be shared freely between signing
/// and verification calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcGroup {
    pub(crate) id: Option<CurveId>,
    pub(crate) fp: PrimeField,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) g: AffinePoint,
    pub(crate) order: Option<PrimeField>,
    pub(crate) nbits: usize,
}

impl EcGroup {
    /// Loads the parameters of a named curve.
    pub fn load(id: CurveId) -> Result<Self, Error> {
        let params = id.params().ok_or(Error::FeatureUnavailable)?;
        let mut group = Self::from_parameters(
            BigUint::from_bytes_be(params.p),
            BigUint::from_bytes_be(params.a),
            BigUint::from_bytes_be(params.b),
            BigUint::from_bytes_be(params.gx),
            BigUint::from_bytes_be(params.gy),
            Some(BigUint::from_bytes_be(params.n)),
        )?;
        group.id = Some(id);
        Ok(group)
    }

    /// Builds a group from explicit parameters.
    ///
    /// `order` is the order `N` of the generator; a group without it supports
    /// point arithmetic but cannot be used for signatures. The generator must
    /// lie on the curve.
    pub fn from_parameters(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: Option<BigUint>,
    ) -> Result<Self, Error> {
        let fp = PrimeField::new(p)?;
        if !fp.contains(&a) || !fp.contains(&b) || !fp.contains(&gx) || !fp.contains(&gy) {
            return Err(Error::BadInput);
        }
        let order = order.map(PrimeField::new).transpose()?;
        let nbits = match &order {
            Some(n) => n.bits(),
            None => fp.bits(),
        };

        let group = EcGroup {
            id: None,
            fp,
            a,
            b,
            g: AffinePoint::new(gx, gy),
            order,
            nbits,
        };
        if !group.is_on_curve(&group.g) {
            return Err(Error::BadInput);
        }
        Ok(group)
    }

    /// The named curve this group was loaded from, if any.
    #[inline]
    pub fn id(&self) -> Option<CurveId> {
        self.id
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        self.fp.modulus()
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Order `N` of the generator, if known.
    #[inline]
    pub fn order(&self) -> Option<&BigUint> {
        self.order.as_ref().map(PrimeField::modulus)
    }

    /// Arithmetic modulo `N`, or [`Error::BadInput`] for groups without an order.
    pub fn scalar_field(&self) -> Result<&PrimeField, Error> {
        self.order.as_ref().ok_or(Error::BadInput)
    }

    /// Bit length of `N` (of `p` when the order is unknown).
    #[inline]
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Bit length of `p`.
    #[inline]
    pub fn pbits(&self) -> usize {
        self.fp.bits()
    }

    /// Size in bytes of a scalar: `ceil(nbits / 8)`.
    #[inline]
    pub fn n_size(&self) -> usize {
        self.nbits.div_ceil(8)
    }

    /// Size in bytes of a field element: `ceil(pbits / 8)`.
    #[inline]
    pub fn p_size(&self) -> usize {
        self.pbits().div_ceil(8)
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if point.is_identity() {
            return true;
        }
        if !self.fp.contains(&point.x) || !self.fp.contains(&point.y) {
            return false;
        }

        let fp = &self.fp;
        let y2 = fp.square(&point.y);
        let x3 = fp.mul(&fp.square(&point.x), &point.x);
        let ax = fp.mul(&self.a, &point.x);
        let rhs = fp.add(&fp.add(&x3, &ax), &self.b);

        y2 == rhs
    }

    /// Negate a point.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        if point.is_identity() {
            return point.clone();
        }
        AffinePoint::new(point.x.clone(), self.fp.neg(&point.y))
    }

    /// Point addition in affine form.
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint, Error> {
        JacobianPoint::from_affine(p)
            .add(&JacobianPoint::from_affine(q), self)
            .to_affine(self)
    }

    /// Checks that `point` is a usable public key: not the identity, with
    /// canonical coordinates, and on the curve.
    pub fn check_pubkey(&self, point: &AffinePoint) -> Result<(), Error> {
        if point.is_identity() {
            return Err(Error::InvalidKey);
        }
        if !self.is_on_curve(point) {
            return Err(Error::InvalidKey);
        }
        Ok(())
    }

    /// Checks that `d` is a usable private key: `1 <= d < N`.
    pub fn check_privkey(&self, d: &BigUint) -> Result<(), Error> {
        let n = self.scalar_field()?;
        if d.is_zero() || !n.contains(d) {
            return Err(Error::InvalidKey);
        }
        Ok(())
    }

    /// Scalar multiplication `m * P` for secret scalars.
    ///
    /// `m` must be a valid private scalar and `P` a valid point. The ladder
    /// always runs `nbits` steps with one addition and one doubling each,
    /// whatever the bits of `m` are.
    pub fn mul(&self, m: &BigUint, point: &AffinePoint) -> Result<AffinePoint, Error> {
        self.check_privkey(m)?;
        self.check_pubkey(point)?;

        let mut r0 = JacobianPoint::identity();
        let mut r1 = JacobianPoint::from_affine(point);
        for i in (0..self.nbits).rev() {
            if m.bit(i as u64) {
                r0 = r0.add(&r1, self);
                r1 = r1.double(self);
            } else {
                r1 = r0.add(&r1, self);
                r0 = r0.double(self);
            }
        }

        r0.to_affine(self)
    }

    /// Multiply the generator: `m * G`.
    pub fn mul_generator(&self, m: &BigUint) -> Result<AffinePoint, Error> {
        self.mul(m, &self.g)
    }

    /// Computes `m * P + n * Q` without any constant-time guarantee; only
    /// suitable for public scalars.
    pub fn muladd(
        &self,
        m: &BigUint,
        p: &AffinePoint,
        n: &BigUint,
        q: &AffinePoint,
    ) -> Result<AffinePoint, Error> {
        shamir_mul_add(self, m, p, n, q).to_affine(self)
    }

    /// Draws a uniformly random scalar in `[1, N-1]`.
    ///
    /// Reads `n_size` bytes, drops the excess low bits so the value has at
    /// most `nbits` bits, and rejects values outside the range. Gives up with
    /// [`Error::RandomFailed`] after [`MAX_SCALAR_TRIES`] rejections.
    pub fn random_scalar<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<SecretScalar, Error> {
        let n = self.scalar_field()?;
        let n_size = self.n_size();
        let excess = 8 * n_size - self.nbits;
        let mut buf = Zeroizing::new(vec![0u8; n_size]);

        for attempt in 1..=MAX_SCALAR_TRIES {
            rng.fill(&mut buf)?;
            let candidate = SecretScalar::new(BigUint::from_bytes_be(&buf) >> excess);
            let value = candidate.expose();
            if value >= &BigUint::one() && n.contains(value) {
                return Ok(candidate);
            }
            trace!(attempt, "random scalar out of range");
        }

        warn!(tries = MAX_SCALAR_TRIES, "random scalar generation exhausted");
        Err(Error::RandomFailed)
    }

    /// Generates a keypair `(d, Q = d*G)`.
    pub fn generate_keypair<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(SecretScalar, AffinePoint), Error> {
        let d = self.random_scalar(rng)?;
        let q = self.mul_generator(d.expose())?;
        Ok((d, q))
    }
}
