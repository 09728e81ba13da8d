//! Message digests and passphrase authentication tags.
//!
//! Both are 512-bit KMACXOF256 outputs, separated by their customization
//! string:
//!
//! - `hash(m) = KMACXOF256("", m, 512, "D")`
//! - `auth_tag(m, pw) = KMACXOF256(pw, m, 512, "T")`

use super::kmac::kmacxof256_512;
use super::labels;
use crate::ct::ConstantTimeEq;

/// Computes the plain cryptographic hash of `message`.
pub fn hash(message: &[u8]) -> [u8; 64] {
    kmacxof256_512(b"", message, labels::HASH)
}

/// Computes the authentication tag of `message` under `passphrase`.
pub fn auth_tag(message: &[u8], passphrase: &[u8]) -> [u8; 64] {
    kmacxof256_512(passphrase, message, labels::TAG)
}

/// Checks `tag` against the tag of `message` under `passphrase`.
///
/// The comparison runs in constant time.
pub fn verify_auth_tag(message: &[u8], passphrase: &[u8], tag: &[u8]) -> bool {
    auth_tag(message, passphrase)[..].ct_eq(tag)
}
