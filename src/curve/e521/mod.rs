//! The E-521 Edwards curve.
//!
//! E-521 is the Edwards curve `x² + y² = 1 + d·x²·y²` with `d = −376014`
//! over the prime field 𝔽ₚ, `p = 2⁵²¹ − 1`. Its group has order `4·r` for
//! a 519-bit prime `r`; the generator `G = (4, y)` spans the subgroup of
//! order `r`.
//!
//! The module is split by layer:
//!
//! - `field`: arithmetic modulo `p`
//! - `scalar`: arithmetic modulo `r`
//! - `point`: affine points, the group law and point reconstruction
//! - `projective`: inversion-free coordinates backing scalar multiplication
//!
//! None of the arithmetic here is constant time.

mod field;
mod point;
mod projective;
mod scalar;

pub use field::{FIELD_BYTES, FieldElement, P};
pub use point::{D, POINT_BYTES, Point};
pub use scalar::{R, SCALAR_BYTES, Scalar};

pub(crate) use scalar::digest_to_uint;
