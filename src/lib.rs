//! Keccak sponge cryptography and Schnorr protocols on E-521
//!
//! This crate implements, from first principles, the Keccak-based
//! functions of NIST SP 800-185 and a small public-key cryptosystem on the
//! E-521 Edwards curve built entirely on top of them.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! layer is explicit about its inputs and encodings, and each protocol is a
//! short composition of the layers below it.
//!
//! # Module overview
//!
//! - `primitives`
//!   The fixed-width `U576` integer used for field elements, scalars and
//!   raw point multipliers.
//!
//! - `hash`
//!   The Keccak-f[1600] permutation, a byte-oriented sponge, and
//!   cSHAKE256 / SHAKE256 with the SP 800-185 encoding helpers
//!   (`left_encode`, `right_encode`, `encode_string`, `bytepad`).
//!
//! - `mac`
//!   KMAC256 and KMACXOF256, the domain-separation labels used throughout
//!   the crate, plain hashing and passphrase authentication tags.
//!
//! - `curve`
//!   Arithmetic on E-521: the field modulo `p = 2⁵²¹ − 1`, scalars modulo
//!   the subgroup order `r`, and the Edwards group law with point
//!   reconstruction from an x-coordinate.
//!
//! - `keys`
//!   Passphrase-derived E-521 key pairs.
//!
//! - `encryption`
//!   Authenticated encryption to an E-521 public key, and under a
//!   passphrase.
//!
//! - `signatures`
//!   Deterministic Schnorr signatures on E-521.
//!
//! - `rng`
//!   A KMAC-based CSPRNG seeded from the operating system.
//!
//! - `codec`
//!   A versioned binary format for public keys, cryptograms and signatures.
//!
//! # Logging
//!
//! Protocol entry points emit `tracing` events at `debug` level and the
//! random generator at `trace` level. Events carry lengths and outcomes,
//! never keys or plaintext. The crate installs no subscriber.
//!
//! # Design goals
//!
//! - Bit-exact conformance with the SP 800-185 sample vectors
//! - Explicit `Result` outcomes for every expected failure
//! - Secret material wiped on drop
//! - Minimal and explicit APIs
//!
//! Curve arithmetic is not constant time. This crate is not intended to
//! replace full-featured, externally audited cryptographic libraries.

#![warn(missing_docs)]

pub mod codec;
pub mod ct;
pub mod curve;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;
pub mod mac;
pub mod primitives;
pub mod rng;
pub mod signatures;

pub use error::{Error, Result};
