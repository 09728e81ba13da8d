//! Keccak-based hash functions exposed by the crate.
//!
//! - `keccak`: the Keccak-f[1600] permutation and the generic sponge
//! - `cshake`: cSHAKE256 / SHAKE256 and the NIST SP 800-185 encodings
//!
//! The keyed constructions (KMAC) live in [`crate::mac`].

pub mod cshake;
pub mod keccak;

/// Re-export of the one-shot cSHAKE256 and SHAKE256 functions.
pub use cshake::{CShake256, cshake256, shake256};
