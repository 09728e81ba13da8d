//! Asymmetric encryption to an E-521 public key.
//!
//! A DHIES-style construction: the sender picks an ephemeral integer
//! `k = 4·k̂` and computes
//!
//! ```text
//! W = k·V          (shared with the recipient)
//! Z = k·G          (sent in the clear)
//! (ke ‖ ka) = KMACXOF256(Wx, "", 1024, "P")
//! c = KMACXOF256(ke, "", 8·|m|, "PKE") ⊕ m
//! t = KMACXOF256(ka, m, 512, "PKA")
//! ```
//!
//! The recipient, holding `s` with `V = s·G`, recovers `W = s·Z` and
//! repeats the derivation. `Wx` enters KMAC as its 66-byte big-endian
//! encoding.

use tracing::debug;
use zeroize::Zeroize;

use super::SessionKeys;
use crate::ct::ConstantTimeEq;
use crate::curve::e521::Point;
use crate::error::{Error, Result};
use crate::keys::e521::{PrivateKey, PublicKey, cofactor_cleared};
use crate::mac::labels;
use crate::rng::Csprng;

/// An encrypted message `(Z, c, t)`.
///
/// Cryptograms are immutable; the fields are only readable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cryptogram {
    z: Point,
    c: Vec<u8>,
    t: [u8; 64],
}

impl Cryptogram {
    /// Assembles a cryptogram from parts received from elsewhere.
    pub fn from_parts(z: Point, c: Vec<u8>, t: [u8; 64]) -> Self {
        Self { z, c, t }
    }

    /// The ephemeral public point `Z = k·G`.
    pub fn z(&self) -> &Point {
        &self.z
    }

    /// The ciphertext, as long as the plaintext.
    pub fn ciphertext(&self) -> &[u8] {
        &self.c
    }

    /// The authentication tag.
    pub fn tag(&self) -> &[u8; 64] {
        &self.t
    }
}

/// Encrypts `message` to `public`, drawing the ephemeral key from a fresh
/// OS-seeded generator.
///
/// # Errors
/// Returns [`Error::Entropy`] if the generator cannot be seeded.
pub fn encrypt(message: &[u8], public: &PublicKey) -> Result<Cryptogram> {
    let mut rng = Csprng::new()?;

    Ok(encrypt_with_rng(message, public, &mut rng))
}

/// Encrypts `message` to `public` with randomness taken from `rng`.
pub fn encrypt_with_rng(message: &[u8], public: &PublicKey, rng: &mut Csprng) -> Cryptogram {
    let mut k_hat = rng.next_block();
    let mut k = cofactor_cleared(&k_hat);
    k_hat.zeroize();

    let w = public.point().multiply(&k);
    let z = Point::GENERATOR.multiply(&k);
    k.zeroize();

    let keys = SessionKeys::derive(&w.x().to_bytes(), labels::PUBLIC_KEY_SPLIT);
    let c = keys.apply_keystream(message, labels::PUBLIC_KEY_ENCRYPT);
    let t = keys.tag(message, labels::PUBLIC_KEY_AUTH);

    debug!(len = message.len(), "encrypted to public key");

    Cryptogram { z, c, t }
}

/// Decrypts `cryptogram` with the private key derived from `passphrase`.
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`] if the passphrase is wrong or
/// the cryptogram was altered.
pub fn decrypt(cryptogram: &Cryptogram, passphrase: &[u8]) -> Result<Vec<u8>> {
    decrypt_with_key(cryptogram, &PrivateKey::from_passphrase(passphrase))
}

/// Decrypts `cryptogram` with `private`.
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`] if the recomputed tag differs
/// from the one in the cryptogram.
pub fn decrypt_with_key(cryptogram: &Cryptogram, private: &PrivateKey) -> Result<Vec<u8>> {
    let w = cryptogram.z.multiply(private.scalar());

    let keys = SessionKeys::derive(&w.x().to_bytes(), labels::PUBLIC_KEY_SPLIT);
    let mut message = keys.apply_keystream(&cryptogram.c, labels::PUBLIC_KEY_ENCRYPT);
    let t = keys.tag(&message, labels::PUBLIC_KEY_AUTH);

    if !t.ct_eq(&cryptogram.t) {
        message.zeroize();
        debug!(len = cryptogram.c.len(), "public key decryption rejected");
        return Err(Error::AuthenticationFailed);
    }

    debug!(len = message.len(), "decrypted with private key");

    Ok(message)
}
