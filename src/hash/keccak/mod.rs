//! Keccak-f[1600] permutation and sponge.
//!
//! This module provides the permutation engine underlying every hash and
//! MAC in the crate, together with a byte-oriented sponge built on it.
//!
//! - `core`: the 24-round permutation over a 200-byte state
//! - `sponge`: absorb / pad / squeeze over a configurable rate
//!
//! The round constants, rotation offsets and lane permutation order are
//! those of FIPS 202.

pub mod core;
pub mod sponge;

pub use self::core::{keccak_f, permute};
pub use sponge::Sponge;

/// Size of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of rounds of Keccak-f[1600].
pub(crate) const ROUNDS: usize = 24;

/// Iota round constants, one per round.
pub(crate) const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by pi.
pub(crate) const ROTATIONS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane visiting order, starting from lane 1.
pub(crate) const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
