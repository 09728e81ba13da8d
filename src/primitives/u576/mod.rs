//! 576-bit unsigned integer primitive
//!
//! This module defines the `U576` type, a fixed-size 576-bit unsigned
//! integer. 576 bits is the smallest multiple of 64 able to hold values
//! modulo `p = 2⁵²¹ − 1`, which makes it the working integer of the E-521
//! field and scalar code.
//!
//! Typical use cases include:
//! - field element and scalar storage
//! - raw scalar multipliers (cofactor-cleared private scalars, nonces)
//! - interpreting KMAC outputs as unsigned big-endian integers
//!
//! The internal representation is nine little-endian `u64` limbs. Every
//! byte-level conversion is big-endian.

mod conv;
mod core;
mod ops;

/// Fixed-size 576-bit unsigned integer.
pub use self::core::U576;
