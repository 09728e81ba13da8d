//! Projective coordinates for scalar multiplication.
//!
//! A projective point `(X : Y : Z)` stands for the affine point
//! `(X/Z, Y/Z)`. Addition in this form needs no field inversion, which
//! lets [`multiply`] run the whole double-and-add loop and pay for a single
//! inversion at the end instead of two per step.
//!
//! The addition law is the complete projective law for the Edwards curve
//! `x² + y² = 1 + d·x²y²`:
//!
//! ```text
//! A = Z1·Z2   B = A²   C = X1·X2   D = Y1·Y2   E = d·C·D
//! F = B − E   G = B + E
//! X3 = A·F·((X1 + Y1)·(X2 + Y2) − C − D)
//! Y3 = A·G·(D − C)
//! Z3 = F·G
//! ```
//!
//! Since `d` is not a square in 𝔽ₚ, `F` and `G` never vanish for points on
//! the curve, so the same formula also doubles.

use super::field::FieldElement;
use super::point::{D, Point};
use crate::primitives::U576;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    pub(crate) const NEUTRAL: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_affine(point: &Point) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            z: FieldElement::ONE,
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = D * c * d;
        let f = b - e;
        let g = b + e;

        Self {
            x: a * f * ((self.x + self.y) * (other.x + other.y) - c - d),
            y: a * g * (d - c),
            z: f * g,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    pub(crate) fn to_affine(self) -> Point {
        let z_inv = self.z.invert();

        Point::from_reduced(self.x * z_inv, self.y * z_inv)
    }
}

/// Computes `k·base` by double-and-add over the bits of `k`, from the most
/// significant to the least significant.
///
/// The accumulator starts at the neutral element, so `0·P` is the neutral
/// element and `1·P = P`. The loop is not constant time.
pub(crate) fn multiply(base: &Point, k: &U576) -> Point {
    let base = ProjectivePoint::from_affine(base);
    let mut acc = ProjectivePoint::NEUTRAL;

    for index in (0..k.bits()).rev() {
        acc = acc.double();

        if k.bit(index) {
            acc = acc.add(&base);
        }
    }

    acc.to_affine()
}
