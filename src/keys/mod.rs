//! Asymmetric key material.
//!
//! This module defines the key types used by the asymmetric protocols of
//! the crate. It provides a clear separation between **key material** and
//! the algorithms that operate on it (encryption, signatures).
//!
//! No encryption, signing or verification logic lives here, only key
//! derivation and representation.
//!
//! ## E-521
//!
//! The `e521` module derives key pairs on the E-521 Edwards curve from
//! passphrases, using KMACXOF256 as the key derivation function. The same
//! passphrase always yields the same key pair.

pub mod e521;
