//! Authenticated encryption built on KMACXOF256.
//!
//! Both schemes in this module follow the same pattern. A secret shared by
//! sender and receiver is expanded into two 512-bit keys,
//!
//! ```text
//! (ke ‖ ka) = KMACXOF256(secret, "", 1024, split label)
//! ```
//!
//! then the message is XORed with a keystream derived from `ke` and
//! authenticated under `ka`:
//!
//! ```text
//! c = KMACXOF256(ke, "", 8·|m|, encrypt label) ⊕ m
//! t = KMACXOF256(ka, m, 512, auth label)
//! ```
//!
//! They differ in where the shared secret comes from:
//!
//! - `schnorr`: an ephemeral Diffie–Hellman value on E-521, for a
//!   recipient public key
//! - `symmetric`: a random salt concatenated with a passphrase
//!
//! Decryption recomputes `t` and releases the plaintext only if it matches
//! in constant time.

use zeroize::Zeroize;

use crate::mac::{kmacxof256, kmacxof256_512};

pub mod schnorr;
pub mod symmetric;

pub use schnorr::Cryptogram;
pub use symmetric::SymmetricCryptogram;

/// Encryption and authentication keys derived from one shared secret.
struct SessionKeys {
    ke: [u8; 64],
    ka: [u8; 64],
}

impl SessionKeys {
    /// Splits the 1024-bit KMAC output of `secret` into `ke ‖ ka`.
    fn derive(secret: &[u8], label: &[u8]) -> Self {
        let mut stream = kmacxof256(secret, b"", 1024, label);

        let mut keys = Self {
            ke: [0u8; 64],
            ka: [0u8; 64],
        };
        keys.ke.copy_from_slice(&stream[..64]);
        keys.ka.copy_from_slice(&stream[64..]);
        stream.zeroize();

        keys
    }

    /// XORs `data` with the keystream of `ke`. Encrypts and decrypts.
    fn apply_keystream(&self, data: &[u8], label: &[u8]) -> Vec<u8> {
        let mut out = kmacxof256(&self.ke, b"", 8 * data.len(), label);

        for (byte, m) in out.iter_mut().zip(data) {
            *byte ^= m;
        }

        out
    }

    /// Computes the tag of `message` under `ka`.
    fn tag(&self, message: &[u8], label: &[u8]) -> [u8; 64] {
        kmacxof256_512(&self.ka, message, label)
    }
}

impl Drop for SessionKeys {
    fn drop(&mut self) {
        self.ke.zeroize();
        self.ka.zeroize();
    }
}
