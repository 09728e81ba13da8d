//! Finite field arithmetic for E-521.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2⁵²¹ − 1
//! ```
//!
//! ## Representation
//!
//! A field element wraps a [`U576`] that is always fully reduced, i.e. in
//! `[0, p)`. Because `p` is a Mersenne prime, reduction of a value `v`
//! folds its high part onto its low part:
//!
//! ```text
//! v = hi·2⁵²¹ + lo ≡ hi + lo (mod p)
//! ```
//!
//! followed by at most one conditional subtraction of `p`.
//!
//! ## Implemented operations
//!
//! - addition, subtraction, negation
//! - multiplication and squaring
//! - exponentiation, inversion (`a^(p−2)`)
//! - the square-root candidate `a^((p+1)/4) = a^(2⁵¹⁹)`
//! - canonical 66-byte big-endian encoding

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::primitives::U576;

/// Number of bytes in the canonical encoding of a field element.
pub const FIELD_BYTES: usize = 66;

/// Number of bits of `p`.
const P_BITS: u32 = 521;

/// Mask of the nine significant bits of the top limb of a reduced value.
const TOP_MASK: u64 = 0x1ff;

/// The field modulus `p = 2⁵²¹ − 1`.
pub const P: U576 = U576::from_limbs([
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    TOP_MASK,
]);

/// An element of 𝔽ₚ, always in canonical form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(U576);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self(U576::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(U576::ONE);

    /// Builds a constant from little-endian limbs.
    ///
    /// The caller guarantees the value is below `p`.
    pub(crate) const fn from_limbs_unchecked(limbs: [u64; 9]) -> Self {
        Self(U576::from_limbs(limbs))
    }

    /// Builds a field element from a small integer.
    pub fn from_u64(value: u64) -> Self {
        Self(U576::from_u64(value))
    }

    /// Reduces an arbitrary 576-bit integer modulo `p`.
    pub fn from_uint(value: &U576) -> Self {
        Self::fold(value)
    }

    /// Accepts an integer only if it is already reduced.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `value >= p`.
    pub fn from_canonical(value: &U576) -> Result<Self> {
        if *value >= P {
            return Err(Error::Malformed("field element is not reduced"));
        }

        Ok(Self(*value))
    }

    /// Decodes a canonical 66-byte big-endian encoding.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the encoded value is not below `p`.
    pub fn from_bytes(bytes: &[u8; FIELD_BYTES]) -> Result<Self> {
        let value =
            U576::from_be_slice(bytes).ok_or(Error::Malformed("field element is too large"))?;

        Self::from_canonical(&value)
    }

    /// Returns the canonical 66-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES] {
        self.0.to_be_array::<FIELD_BYTES>()
    }

    /// Returns the underlying integer in `[0, p)`.
    pub fn to_uint(&self) -> U576 {
        self.0
    }

    /// Returns `true` for the zero element.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the canonical integer is odd.
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Squares the element.
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Raises the element to the power `exponent`.
    ///
    /// Left-to-right square-and-multiply over the bits of `exponent`.
    pub fn pow(&self, exponent: &U576) -> Self {
        let mut acc = Self::ONE;

        for index in (0..exponent.bits()).rev() {
            acc = acc.square();

            if exponent.bit(index) {
                acc = acc * *self;
            }
        }

        acc
    }

    /// Computes the multiplicative inverse as `a^(p−2)`.
    ///
    /// Zero has no inverse; it maps to zero.
    pub fn invert(&self) -> Self {
        self.pow(&(P - U576::from_u64(2)))
    }

    /// Computes `a^((p+1)/4)`.
    ///
    /// Since `p ≡ 3 (mod 4)`, this is a square root of `a` whenever one
    /// exists. The caller must check the result. `(p+1)/4 = 2⁵¹⁹`, so the
    /// exponentiation is 519 squarings.
    pub fn sqrt_candidate(&self) -> Self {
        let mut root = *self;

        for _ in 0..P_BITS - 2 {
            root = root.square();
        }

        root
    }

    /// Reduces any 576-bit value.
    fn fold(value: &U576) -> Self {
        let mut low = value.limbs();
        low[8] &= TOP_MASK;

        let high = *value >> P_BITS;
        Self::finish(U576::from_limbs(low) + high)
    }

    /// Final step of every reduction.
    ///
    /// `value` must be below `2·p + 2`; after one more fold it is at most
    /// `p`, which a single conditional subtraction brings into range.
    fn finish(value: U576) -> Self {
        let mut low = value.limbs();
        low[8] &= TOP_MASK;

        let folded = U576::from_limbs(low) + (value >> P_BITS);

        if folded >= P {
            Self(folded - P)
        } else {
            Self(folded)
        }
    }

    /// Reduces a product of two reduced elements (below 2¹⁰⁴²).
    fn reduce_product(wide: &[u64; 18]) -> Self {
        let mut low = [0u64; 9];
        low[..8].copy_from_slice(&wide[..8]);
        low[8] = wide[8] & TOP_MASK;

        let mut high = [0u64; 9];

        for (i, limb) in high.iter_mut().enumerate() {
            *limb = (wide[8 + i] >> 9) | (wide[9 + i] << 55);
        }

        Self::finish(U576::from_limbs(low) + U576::from_limbs(high))
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::finish(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::finish(self.0 + (P - rhs.0))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::finish(P - self.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduce_product(&self.0.widening_mul(&rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p_minus(k: u64) -> FieldElement {
        FieldElement::from_canonical(&(P - U576::from_u64(k))).unwrap()
    }

    #[test]
    fn addition_wraps_at_p() {
        assert_eq!(p_minus(1) + FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(p_minus(1) + p_minus(1), p_minus(2));
    }

    #[test]
    fn subtraction_and_negation() {
        assert_eq!(FieldElement::ZERO - FieldElement::ONE, p_minus(1));
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
        assert_eq!(-FieldElement::from_u64(5), p_minus(5));
    }

    #[test]
    fn multiplication_of_minus_one() {
        let minus_one = p_minus(1);
        assert_eq!(minus_one * minus_one, FieldElement::ONE);
        assert_eq!(minus_one * FieldElement::from_u64(7), p_minus(7));
    }

    #[test]
    fn inverse_roundtrip() {
        let a = FieldElement::from_u64(376014);
        assert_eq!(a * a.invert(), FieldElement::ONE);

        let b = p_minus(12345);
        assert_eq!(b * b.invert(), FieldElement::ONE);
    }

    #[test]
    fn square_root_of_square() {
        let a = FieldElement::from_u64(987654321);
        let root = a.square().sqrt_candidate();
        assert!(root == a || root == -a);
    }

    #[test]
    fn fold_reduces_large_values() {
        let reduced = FieldElement::from_uint(&U576::MAX);
        // 2⁵⁷⁶ − 1 = 2⁵⁵·(2⁵²¹ − 1) + 2⁵⁵ − 1
        assert_eq!(reduced, FieldElement::from_u64((1u64 << 55) - 1));
    }

    #[test]
    fn non_canonical_encoding_is_rejected() {
        let bytes = P.to_be_array::<FIELD_BYTES>();
        assert!(FieldElement::from_bytes(&bytes).is_err());
    }
}
