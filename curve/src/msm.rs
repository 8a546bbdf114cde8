use num_bigint::BigUint;

use crate::affine::AffinePoint;
use crate::group::EcGroup;
use crate::projective::JacobianPoint;

/// Compute m * P + n * Q with a single doubling chain (Shamir's trick).
///
/// Runs in time dependent on the scalars; callers must only pass public data.
pub(crate) fn shamir_mul_add(
    group: &EcGroup,
    m: &BigUint,
    p: &AffinePoint,
    n: &BigUint,
    q: &AffinePoint,
) -> JacobianPoint {
    let p = JacobianPoint::from_affine(p);
    let q = JacobianPoint::from_affine(q);
    let pq = p.add(&q, group);

    let bits = m.bits().max(n.bits());
    let mut result = JacobianPoint::identity();

    for i in (0..bits).rev() {
        result = result.double(group);
        match (m.bit(i), n.bit(i)) {
            (true, true) => result = result.add(&pq, group),
            (true, false) => result = result.add(&p, group),
            (false, true) => result = result.add(&q, group),
            (false, false) => {}
        }
    }

    result
}
