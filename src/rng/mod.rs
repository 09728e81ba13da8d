//! Random number generation module
//!
//! This module provides the randomness used by the protocol layer: the
//! ephemeral scalar of asymmetric encryption and the salt of symmetric
//! cryptograms.
//!
//! It is built around a KMACXOF256-based deterministic random bit generator
//! (DRBG) seeded from the operating system through `getrandom`.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through rekeying after every request
/// - Minimal and explicit API surface
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// within the crate.
pub use csprng::{Csprng, SEED_BYTES};
