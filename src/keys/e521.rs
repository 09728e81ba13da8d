//! E-521 key material derived from passphrases.
//!
//! A key pair is a deterministic function of a passphrase:
//!
//! ```text
//! s = 4 · KMACXOF256(pw, "", 512, "K")
//! V = s · G
//! ```
//!
//! The factor 4 is the cofactor of E-521. Multiplying by it maps every
//! curve point into the subgroup of order `r`, so `s` is kept as an
//! unreduced integer and never taken modulo `r` before use.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve::e521::{Point, SCALAR_BYTES, digest_to_uint};
use crate::error::{Error, Result};
use crate::mac::{kmacxof256_512, labels};
use crate::primitives::U576;

/// Interprets a 512-bit KMAC output as an unsigned big-endian integer and
/// multiplies it by the cofactor.
pub(crate) fn cofactor_cleared(bytes: &[u8; 64]) -> U576 {
    digest_to_uint(bytes) << 2
}

/// An E-521 private key: the cofactor-cleared integer `s`.
///
/// The value is wiped from memory when the key is dropped and is never
/// printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    s: U576,
}

impl PrivateKey {
    /// Derives the private key of `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        let mut x = kmacxof256_512(passphrase, b"", labels::KEY);
        let s = cofactor_cleared(&x);
        x.zeroize();

        Self { s }
    }

    /// Returns `s` as an integer.
    pub(crate) fn scalar(&self) -> &U576 {
        &self.s
    }

    /// Returns the 66-byte big-endian encoding of `s`, the form in which it
    /// keys the signature nonce derivation.
    pub(crate) fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        self.s.to_be_array::<SCALAR_BYTES>()
    }

    /// Computes the matching public key `V = s·G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(Point::GENERATOR.multiply(&self.s))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// An E-521 public key: the point `V = s·G`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Derives the public key of `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        PrivateKey::from_passphrase(passphrase).public_key()
    }

    /// Wraps a curve point received from elsewhere.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPublicKey`] if `point` is the neutral element
    /// or has a component of order 2 or 4. Such a key would make `k·V`
    /// independent of `k` for cofactor-cleared multipliers.
    pub fn from_point(point: Point) -> Result<Self> {
        if point == Point::NEUTRAL || !point.is_in_subgroup() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self(point))
    }

    /// Returns the underlying point `V`.
    pub fn point(&self) -> &Point {
        &self.0
    }
}

/// A private key together with its public key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Derives the key pair of `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        let private = PrivateKey::from_passphrase(passphrase);
        let public = private.public_key();

        Self { private, public }
    }

    /// Returns the private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Returns the public half, the only part meant to leave the process.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}
