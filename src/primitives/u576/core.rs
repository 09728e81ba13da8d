//! 576-bit unsigned integer primitive
//!
//! This module defines a fixed-size 576-bit unsigned integer type (`U576`).
//!
//! It is designed as a **simple, explicit value type**, not as a general
//! big-integer library. The only arithmetic it offers is what the E-521
//! code needs: carry-reporting addition and subtraction, a full widening
//! multiplication, and reduction of a double-width product by a modulus.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

use zeroize::Zeroize;

/// Number of 64-bit limbs in a `U576`.
pub(crate) const LIMBS: usize = 9;

/// Number of 64-bit limbs in a double-width product.
pub(crate) const WIDE_LIMBS: usize = 2 * LIMBS;

/// Fixed-size 576-bit unsigned integer.
///
/// The value is stored as nine `u64` limbs in **little-endian** limb order
/// (limb 0 holds the least significant 64 bits).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U576(pub(crate) [u64; LIMBS]);

impl U576 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; LIMBS]);

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2⁵⁷⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Builds a value from little-endian limbs.
    ///
    /// This is a `const` constructor suitable for curve constants.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Builds a value from a single `u64`.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        Self(limbs)
    }

    /// Returns the little-endian limbs.
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns `true` if the least significant bit is set.
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Returns bit `index` (0 is the least significant bit).
    ///
    /// Bits beyond 575 read as zero.
    pub fn bit(&self, index: usize) -> bool {
        if index >= LIMBS * 64 {
            return false;
        }

        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Returns the number of significant bits (0 for zero).
    pub fn bits(&self) -> usize {
        LIMBS * 64 - self.leading_zeros() as usize
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=576`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Adds `rhs`, returning the wrapped sum and whether a carry left the
    /// most significant limb.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = false;

        for (o, (&a, &b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            *o = sum;
            carry = c1 || c2;
        }

        (Self(out), carry)
    }

    /// Subtracts `rhs`, returning the wrapped difference and whether a
    /// borrow was needed (i.e. `rhs > self`).
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = false;

        for (o, (&a, &b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            *o = diff;
            borrow = b1 || b2;
        }

        (Self(out), borrow)
    }

    /// Full 576 × 576 → 1152-bit schoolbook multiplication.
    ///
    /// The product is returned as eighteen little-endian limbs and is never
    /// truncated.
    pub fn widening_mul(&self, rhs: &Self) -> [u64; WIDE_LIMBS] {
        let mut out = [0u64; WIDE_LIMBS];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u128;

            for (j, &b) in rhs.0.iter().enumerate() {
                let t = a as u128 * b as u128 + out[i + j] as u128 + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }

            out[i + LIMBS] = carry as u64;
        }

        out
    }

    /// Reduces a double-width value modulo `modulus`.
    ///
    /// This is a classic shift-and-subtract long division that keeps only
    /// the remainder. It is generic over the modulus and is used where no
    /// special-form reduction applies (the scalar field).
    ///
    /// # Panics
    /// Panics if `modulus` is zero or does not fit in 575 bits.
    pub fn reduce_wide(wide: &[u64; WIDE_LIMBS], modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "reduction by zero");
        assert!(!modulus.bit(LIMBS * 64 - 1), "modulus must fit in 575 bits");

        let top = wide
            .iter()
            .rposition(|&limb| limb != 0)
            .map_or(0, |i| i * 64 + 64 - wide[i].leading_zeros() as usize);

        let mut remainder = Self::ZERO;

        for index in (0..top).rev() {
            let incoming = (wide[index / 64] >> (index % 64)) & 1;

            remainder = remainder << 1;
            remainder.0[0] |= incoming;

            if remainder >= *modulus {
                remainder = remainder - *modulus;
            }
        }

        remainder
    }

    /// Reduces a single-width value modulo `modulus`.
    pub fn reduce(&self, modulus: &Self) -> Self {
        let mut wide = [0u64; WIDE_LIMBS];
        wide[..LIMBS].copy_from_slice(&self.0);

        Self::reduce_wide(&wide, modulus)
    }
}

impl Ord for U576 {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U576 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for U576 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Display for U576 {
    /// Formats the value as a big-endian, colon-separated hexadecimal
    /// string, e.g. `00:1F:A4:...`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.to_be_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
