//! Scalar arithmetic modulo the E-521 subgroup order.
//!
//! The generator `G` of E-521 spans a subgroup of prime order
//!
//! ```text
//! r = 2⁵¹⁹ − 337554763258501705789107630418782636071904961214051226618635150085779108655765
//! ```
//!
//! and the full curve has order `4·r`. Signature responses are computed
//! in this field. Reduction uses the generic long division of
//! [`U576::reduce_wide`]; scalars are touched a handful of times per
//! protocol run, so no special-form reduction is needed.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::primitives::U576;

/// Number of bytes in the canonical encoding of a scalar.
pub const SCALAR_BYTES: usize = 66;

/// The prime order `r` of the subgroup generated by `G`.
pub const R: U576 = U576::from_limbs([
    0x40ea2435f5180d6b,
    0xfbd8c4569a8f1f45,
    0x36b8af5e7ec53f04,
    0x15b6c64746fc85f7,
    0xfffffffffffffffd,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x000000000000007f,
]);

/// An integer modulo `r`, always in `[0, r)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar(U576);

impl Scalar {
    /// The scalar zero.
    pub const ZERO: Self = Self(U576::ZERO);

    /// The scalar one.
    pub const ONE: Self = Self(U576::ONE);

    /// Builds a scalar from a small integer.
    pub fn from_u64(value: u64) -> Self {
        Self(U576::from_u64(value))
    }

    /// Reduces an arbitrary 576-bit integer modulo `r`.
    pub fn from_uint(value: &U576) -> Self {
        Self(value.reduce(&R))
    }

    /// Interprets `bytes` as an unsigned big-endian integer and reduces it
    /// modulo `r`.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the value does not fit in 576 bits.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Result<Self> {
        let value =
            U576::from_be_slice(bytes).ok_or(Error::Malformed("scalar input is too large"))?;

        Ok(Self::from_uint(&value))
    }

    /// Reduces a 512-bit big-endian digest modulo `r`.
    pub fn from_digest(digest: &[u8; 64]) -> Self {
        Self::from_uint(&digest_to_uint(digest))
    }

    /// Decodes a canonical 66-byte big-endian encoding.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the encoded value is not below `r`.
    pub fn from_bytes(bytes: &[u8; SCALAR_BYTES]) -> Result<Self> {
        let value = U576::from_be_slice(bytes).ok_or(Error::Malformed("scalar is too large"))?;

        if value >= R {
            return Err(Error::Malformed("scalar is not reduced"));
        }

        Ok(Self(value))
    }

    /// Returns the canonical 66-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        self.0.to_be_array::<SCALAR_BYTES>()
    }

    /// Returns the underlying integer in `[0, r)`.
    pub fn to_uint(&self) -> U576 {
        self.0
    }

    /// Returns `true` for the zero scalar.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Reads a 512-bit big-endian digest as an integer.
pub(crate) fn digest_to_uint(digest: &[u8; 64]) -> U576 {
    let mut wide = [0u8; 72];
    wide[8..].copy_from_slice(digest);

    U576::from(wide)
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // both operands are below r < 2⁵¹⁹, so the sum cannot overflow
        let sum = self.0 + rhs.0;

        if sum >= R { Self(sum - R) } else { Self(sum) }
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.0.overflowing_sub(&rhs.0);

        if borrow { Self(diff + R) } else { Self(diff) }
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(U576::reduce_wide(&self.0.widening_mul(&rhs.0), &R))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r_minus(k: u64) -> Scalar {
        Scalar::from_uint(&(R - U576::from_u64(k)))
    }

    #[test]
    fn order_reduces_to_zero() {
        assert_eq!(Scalar::from_uint(&R), Scalar::ZERO);
        assert_eq!(
            Scalar::from_uint(&(R + U576::from_u64(9))),
            Scalar::from_u64(9)
        );
    }

    #[test]
    fn subtraction_wraps() {
        assert_eq!(Scalar::ZERO - Scalar::ONE, r_minus(1));
        assert_eq!(r_minus(1) + Scalar::from_u64(2), Scalar::ONE);
        assert_eq!(-Scalar::from_u64(3), r_minus(3));
    }

    #[test]
    fn multiplication_of_minus_one() {
        assert_eq!(r_minus(1) * r_minus(1), Scalar::ONE);
        assert_eq!(r_minus(2) * Scalar::from_u64(3), r_minus(6));
    }

    #[test]
    fn byte_encoding() {
        let s = r_minus(77);
        assert_eq!(Scalar::from_bytes(&s.to_bytes()), Ok(s));
        assert!(Scalar::from_bytes(&R.to_be_array::<SCALAR_BYTES>()).is_err());
    }
}
