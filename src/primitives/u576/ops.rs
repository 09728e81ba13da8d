//! Arithmetic and bitwise operations for `U576`
//!
//! This module implements the operator traits needed by the field and
//! scalar code. Addition and subtraction wrap modulo 2⁵⁷⁶; callers that
//! care about the carry use [`U576::overflowing_add`] and
//! [`U576::overflowing_sub`] instead.

use super::core::{LIMBS, U576};
use std::ops::{Add, Shl, Shr, Sub};

/// Addition modulo 2⁵⁷⁶.
impl Add for U576 {
    type Output = U576;

    fn add(self, rhs: U576) -> Self::Output {
        self.overflowing_add(&rhs).0
    }
}

/// Subtraction modulo 2⁵⁷⁶.
impl Sub for U576 {
    type Output = U576;

    fn sub(self, rhs: U576) -> Self::Output {
        self.overflowing_sub(&rhs).0
    }
}

/// Logical left shift (`<<`).
///
/// Shifts greater than or equal to 576 bits yield zero.
impl Shl<u32> for U576 {
    type Output = U576;

    fn shl(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift >= LIMBS * 64 {
            return U576::ZERO;
        }

        let limb_shift = shift / 64;
        let bit_shift = shift % 64;

        let mut out = [0u64; LIMBS];

        for i in limb_shift..LIMBS {
            let src = i - limb_shift;
            let mut value = self.0[src] << bit_shift;

            if bit_shift != 0 && src > 0 {
                value |= self.0[src - 1] >> (64 - bit_shift);
            }

            out[i] = value;
        }

        U576(out)
    }
}

/// Logical right shift (`>>`).
///
/// Shifts greater than or equal to 576 bits yield zero.
impl Shr<u32> for U576 {
    type Output = U576;

    fn shr(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift >= LIMBS * 64 {
            return U576::ZERO;
        }

        let limb_shift = shift / 64;
        let bit_shift = shift % 64;

        let mut out = [0u64; LIMBS];

        for (i, o) in out.iter_mut().enumerate().take(LIMBS - limb_shift) {
            let src = i + limb_shift;
            let mut value = self.0[src] >> bit_shift;

            if bit_shift != 0 && src + 1 < LIMBS {
                value |= self.0[src + 1] << (64 - bit_shift);
            }

            *o = value;
        }

        U576(out)
    }
}
