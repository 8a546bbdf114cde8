use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Affine point on a short Weierstrass curve `y^2 = x^3 + a*x + b`.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// Coordinates are plain integers; which curve they belong to is decided by
/// the [`EcGroup`](crate::EcGroup) the point is used with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl AffinePoint {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity (identity element).
    pub fn identity() -> Self {
        AffinePoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_infinity
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}
