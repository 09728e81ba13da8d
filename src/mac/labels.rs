//! Customization strings used for domain separation.
//!
//! Every logical use of KMACXOF256 in the crate is keyed by one of these
//! strings. Two uses that share a key but not a label produce independent
//! outputs, so the labels must be reproduced byte for byte by any
//! interoperating implementation.

/// Plain cryptographic hash of a message.
pub const HASH: &[u8] = b"D";

/// Authentication tag under a passphrase, and the Schnorr challenge.
pub const TAG: &[u8] = b"T";

/// Private scalar derivation from a passphrase.
pub const KEY: &[u8] = b"K";

/// Asymmetric encryption: split of the shared secret into `ke ‖ ka`.
pub const PUBLIC_KEY_SPLIT: &[u8] = b"P";

/// Asymmetric encryption: keystream.
pub const PUBLIC_KEY_ENCRYPT: &[u8] = b"PKE";

/// Asymmetric encryption: authentication tag.
pub const PUBLIC_KEY_AUTH: &[u8] = b"PKA";

/// Schnorr signature nonce derivation.
pub const NONCE: &[u8] = b"N";

/// Symmetric encryption: split of `z ‖ pw` into `ke ‖ ka`.
pub const SYMMETRIC_SPLIT: &[u8] = b"S";

/// Symmetric encryption: keystream.
pub const SYMMETRIC_ENCRYPT: &[u8] = b"SKE";

/// Symmetric encryption: authentication tag.
pub const SYMMETRIC_AUTH: &[u8] = b"SKA";

/// Output expansion of the internal random generator.
pub const DRBG: &[u8] = b"DRBG";
