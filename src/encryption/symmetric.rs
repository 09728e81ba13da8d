//! Passphrase-based authenticated encryption.
//!
//! The sender draws a random 512-bit salt `z` and computes
//!
//! ```text
//! (ke ‖ ka) = KMACXOF256(z ‖ pw, "", 1024, "S")
//! c = KMACXOF256(ke, "", 8·|m|, "SKE") ⊕ m
//! t = KMACXOF256(ka, m, 512, "SKA")
//! ```
//!
//! and transmits `z ‖ c ‖ t`. The salt makes every encryption of the same
//! message under the same passphrase distinct.

use tracing::debug;
use zeroize::Zeroize;

use super::SessionKeys;
use crate::ct::ConstantTimeEq;
use crate::error::{Error, Result};
use crate::mac::labels;
use crate::rng::Csprng;

/// Length of the salt `z`.
pub const SALT_BYTES: usize = 64;

/// Length of the tag `t`.
pub const TAG_BYTES: usize = 64;

/// A passphrase cryptogram `(z, c, t)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricCryptogram {
    z: [u8; SALT_BYTES],
    c: Vec<u8>,
    t: [u8; TAG_BYTES],
}

impl SymmetricCryptogram {
    /// The salt.
    pub fn salt(&self) -> &[u8; SALT_BYTES] {
        &self.z
    }

    /// The ciphertext, as long as the plaintext.
    pub fn ciphertext(&self) -> &[u8] {
        &self.c
    }

    /// The authentication tag.
    pub fn tag(&self) -> &[u8; TAG_BYTES] {
        &self.t
    }

    /// Serialises the cryptogram as `z ‖ c ‖ t`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_BYTES + self.c.len() + TAG_BYTES);

        out.extend_from_slice(&self.z);
        out.extend_from_slice(&self.c);
        out.extend_from_slice(&self.t);

        out
    }

    /// Splits `z ‖ c ‖ t`.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `bytes` is shorter than the salt and
    /// tag together.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < SALT_BYTES + TAG_BYTES {
            return Err(Error::Malformed("symmetric cryptogram is too short"));
        }

        let (z, rest) = bytes.split_at(SALT_BYTES);
        let (c, t) = rest.split_at(rest.len() - TAG_BYTES);

        let mut cryptogram = Self {
            z: [0u8; SALT_BYTES],
            c: c.to_vec(),
            t: [0u8; TAG_BYTES],
        };
        cryptogram.z.copy_from_slice(z);
        cryptogram.t.copy_from_slice(t);

        Ok(cryptogram)
    }
}

fn session_keys(salt: &[u8; SALT_BYTES], passphrase: &[u8]) -> SessionKeys {
    let mut secret = Vec::with_capacity(SALT_BYTES + passphrase.len());
    secret.extend_from_slice(salt);
    secret.extend_from_slice(passphrase);

    let keys = SessionKeys::derive(&secret, labels::SYMMETRIC_SPLIT);
    secret.zeroize();

    keys
}

/// Encrypts `message` under `passphrase` with a salt from a fresh
/// OS-seeded generator.
///
/// # Errors
/// Returns [`Error::Entropy`] if the generator cannot be seeded.
pub fn encrypt(message: &[u8], passphrase: &[u8]) -> Result<SymmetricCryptogram> {
    let mut rng = Csprng::new()?;

    Ok(encrypt_with_rng(message, passphrase, &mut rng))
}

/// Encrypts `message` under `passphrase` with a salt taken from `rng`.
pub fn encrypt_with_rng(
    message: &[u8],
    passphrase: &[u8],
    rng: &mut Csprng,
) -> SymmetricCryptogram {
    let z = rng.next_block();

    let keys = session_keys(&z, passphrase);
    let c = keys.apply_keystream(message, labels::SYMMETRIC_ENCRYPT);
    let t = keys.tag(message, labels::SYMMETRIC_AUTH);

    debug!(len = message.len(), "encrypted under passphrase");

    SymmetricCryptogram { z, c, t }
}

/// Decrypts `cryptogram` under `passphrase`.
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`] if the passphrase is wrong or
/// the cryptogram was altered.
pub fn decrypt(cryptogram: &SymmetricCryptogram, passphrase: &[u8]) -> Result<Vec<u8>> {
    let keys = session_keys(&cryptogram.z, passphrase);
    let mut message = keys.apply_keystream(&cryptogram.c, labels::SYMMETRIC_ENCRYPT);
    let t = keys.tag(&message, labels::SYMMETRIC_AUTH);

    if !t.ct_eq(&cryptogram.t) {
        message.zeroize();
        debug!(len = cryptogram.c.len(), "passphrase decryption rejected");
        return Err(Error::AuthenticationFailed);
    }

    debug!(len = message.len(), "decrypted under passphrase");

    Ok(message)
}

/// Decrypts a serialised `z ‖ c ‖ t` blob under `passphrase`.
///
/// # Errors
/// Returns [`Error::Malformed`] for blobs shorter than 128 bytes and
/// [`Error::AuthenticationFailed`] on a tag mismatch.
pub fn decrypt_bytes(bytes: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    decrypt(&SymmetricCryptogram::from_bytes(bytes)?, passphrase)
}
