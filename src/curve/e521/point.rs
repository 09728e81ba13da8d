//! Affine points of the E-521 Edwards curve.
//!
//! The curve is defined over 𝔽ₚ, `p = 2⁵²¹ − 1`, by
//!
//! ```text
//! x² + y² = 1 + d·x²·y²,   d = −376014
//! ```
//!
//! Its neutral element is `(0, 1)` and the generator `G` is the point with
//! `x = 4` and even `y`. The addition law is
//!
//! ```text
//! (x1, y1) + (x2, y2) = ( (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2),
//!                         (y1·y2 − x1·x2) / (1 − d·x1·x2·y1·y2) )
//! ```
//!
//! which is complete: it needs no special case for doubling or for the
//! neutral element.

use std::ops::{Add, Neg};

use super::field::{FIELD_BYTES, FieldElement};
use super::projective;
use super::scalar::{R, Scalar};
use crate::error::{Error, Result};
use crate::primitives::U576;

/// Number of bytes of an encoded point (two canonical coordinates).
pub const POINT_BYTES: usize = 2 * FIELD_BYTES;

/// `|d|`, the magnitude of the curve coefficient.
const D_MAGNITUDE: u64 = 376014;

/// The curve coefficient `d = −376014 mod p`.
pub const D: FieldElement = FieldElement::from_limbs_unchecked([
    u64::MAX - D_MAGNITUDE,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    0x1ff,
]);

/// y-coordinate of the generator (the even root for `x = 4`).
const GENERATOR_Y: FieldElement = FieldElement::from_limbs_unchecked([
    0xbcdfb41d0093b10c,
    0x64b0de40f93e22f8,
    0xfa955cbfb1cfd4e0,
    0x5616ebb481557d7b,
    0x050b3c80f5920a14,
    0xf3be43295904d1e4,
    0x15c806d24013b3eb,
    0xd4b4952f9b741bdb,
    0x000000000000011d,
]);

/// A point on E-521 in affine coordinates.
///
/// Both coordinates are reduced modulo `p`, and every constructor checks
/// the curve equation, so a `Point` is always a curve point. Equality is
/// coordinate-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub const NEUTRAL: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// The generator `G = (4, y)` with `y` even.
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_limbs_unchecked([4, 0, 0, 0, 0, 0, 0, 0, 0]),
        y: GENERATOR_Y,
    };

    /// Returns the neutral element.
    pub fn neutral() -> Self {
        Self::NEUTRAL
    }

    /// Returns the generator `G`.
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    /// Builds a point from its coordinates.
    ///
    /// # Errors
    /// Returns [`Error::NotOnCurve`] if `(x, y)` does not satisfy the curve
    /// equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self { x, y };

        if !point.is_on_curve() {
            return Err(Error::NotOnCurve);
        }

        Ok(point)
    }

    /// Wraps coordinates produced by the group law, which are on the curve
    /// by construction.
    pub(crate) fn from_reduced(x: FieldElement, y: FieldElement) -> Self {
        debug_assert!(Self { x, y }.is_on_curve());

        Self { x, y }
    }

    /// Reconstructs the point with x-coordinate `x` whose y-coordinate has
    /// least significant bit `odd`.
    ///
    /// Solves `y² = (1 − x²) / (1 + 376014·x²)` with the candidate root
    /// `v^((p+1)/4)`, negating it when its parity does not match.
    ///
    /// # Errors
    /// Returns [`Error::NoSuchPoint`] if `v` is not a square, or if the only
    /// root is `y = 0` and an odd `y` was requested.
    pub fn from_x(x: FieldElement, odd: bool) -> Result<Self> {
        let x2 = x.square();
        let numerator = FieldElement::ONE - x2;
        let denominator = FieldElement::ONE + FieldElement::from_u64(D_MAGNITUDE) * x2;
        let v = numerator * denominator.invert();

        let mut y = v.sqrt_candidate();

        if y.is_odd() != odd {
            y = -y;
        }

        if y.square() != v || y.is_odd() != odd {
            return Err(Error::NoSuchPoint);
        }

        Ok(Self { x, y })
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Returns the opposite point `(−x, y)`.
    pub fn negate(&self) -> Self {
        -*self
    }

    /// Checks `x² + y² = 1 + d·x²·y²`.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        x2 + y2 == FieldElement::ONE + D * x2 * y2
    }

    /// Computes `k·self` for an arbitrary non-negative integer `k`.
    ///
    /// `k` is used as is, without reduction modulo `r`, so cofactor-cleared
    /// multipliers keep clearing the small-order component of points
    /// outside the prime-order subgroup.
    pub fn multiply(&self, k: &U576) -> Self {
        projective::multiply(self, k)
    }

    /// Computes `k·self` for a scalar modulo `r`.
    pub fn multiply_scalar(&self, k: &Scalar) -> Self {
        projective::multiply(self, &k.to_uint())
    }

    /// Checks that the point is annihilated by `r`, i.e. that it lies in
    /// the prime-order subgroup. The neutral element passes.
    pub fn is_in_subgroup(&self) -> bool {
        projective::multiply(self, &R) == Self::NEUTRAL
    }

    /// Returns the encoding `x ‖ y` (two 66-byte big-endian coordinates).
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let mut out = [0u8; POINT_BYTES];

        out[..FIELD_BYTES].copy_from_slice(&self.x.to_bytes());
        out[FIELD_BYTES..].copy_from_slice(&self.y.to_bytes());

        out
    }

    /// Decodes `x ‖ y`, validating both coordinates and the curve equation.
    pub fn from_bytes(bytes: &[u8; POINT_BYTES]) -> Result<Self> {
        let mut x = [0u8; FIELD_BYTES];
        let mut y = [0u8; FIELD_BYTES];

        x.copy_from_slice(&bytes[..FIELD_BYTES]);
        y.copy_from_slice(&bytes[FIELD_BYTES..]);

        Self::new(FieldElement::from_bytes(&x)?, FieldElement::from_bytes(&y)?)
    }
}

impl Default for Point {
    /// The neutral element.
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Add for Point {
    type Output = Point;

    /// Affine addition; each coordinate costs one field inversion.
    fn add(self, rhs: Point) -> Point {
        let x1x2 = self.x * rhs.x;
        let y1y2 = self.y * rhs.y;
        let t = D * x1x2 * y1y2;

        let x = (self.x * rhs.y + self.y * rhs.x) * (FieldElement::ONE + t).invert();
        let y = (y1y2 - x1x2) * (FieldElement::ONE - t).invert();

        Self::from_reduced(x, y)
    }
}

impl Neg for Point {
    type Output = Point;

    /// `−(x, y) = (−x, y)`.
    fn neg(self) -> Point {
        Self {
            x: -self.x,
            y: self.y,
        }
    }
}
