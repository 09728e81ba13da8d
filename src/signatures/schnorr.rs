//! Schnorr signatures on E-521 with KMACXOF256.
//!
//! Signing with the private integer `s`:
//!
//! ```text
//! k = 4 · KMACXOF256(s, m, 512, "N")
//! U = k·G
//! h = KMACXOF256(Ux, m, 512, "T")
//! z = (k − h·s) mod r
//! ```
//!
//! Verification against `V = s·G` recomputes `U' = z·G + h·V`, which equals
//! `U` for a genuine signature, and accepts iff
//! `KMACXOF256(U'x, m, 512, "T") == h`.
//!
//! The nonce `k` is derived from the key and the message, so signing is
//! deterministic. `s` and `Ux` enter KMAC as 66-byte big-endian encodings,
//! and `h` is read as an unsigned big-endian integer.

use tracing::debug;
use zeroize::Zeroize;

use crate::ct::ConstantTimeEq;
use crate::curve::e521::{Point, Scalar, digest_to_uint};
use crate::keys::e521::{PrivateKey, PublicKey, cofactor_cleared};
use crate::mac::{kmacxof256_512, labels};

/// A signature `(h, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    h: [u8; 64],
    z: Scalar,
}

impl Signature {
    /// Assembles a signature from parts received from elsewhere.
    ///
    /// No validation is performed here; a forged or corrupted signature is
    /// rejected by [`verify`].
    pub fn from_parts(h: [u8; 64], z: Scalar) -> Self {
        Self { h, z }
    }

    /// The challenge `h`.
    pub fn h(&self) -> &[u8; 64] {
        &self.h
    }

    /// The response `z`.
    pub fn z(&self) -> &Scalar {
        &self.z
    }
}

fn challenge(u: &Point, message: &[u8]) -> [u8; 64] {
    kmacxof256_512(&u.x().to_bytes(), message, labels::TAG)
}

/// Signs `message` with the private key derived from `passphrase`.
pub fn sign(message: &[u8], passphrase: &[u8]) -> Signature {
    sign_with_key(message, &PrivateKey::from_passphrase(passphrase))
}

/// Signs `message` with `private`.
pub fn sign_with_key(message: &[u8], private: &PrivateKey) -> Signature {
    let mut s_bytes = private.to_bytes();
    let mut nonce = kmacxof256_512(&s_bytes, message, labels::NONCE);
    s_bytes.zeroize();

    let mut k = cofactor_cleared(&nonce);
    nonce.zeroize();

    let u = Point::GENERATOR.multiply(&k);
    let h = challenge(&u, message);

    let z = Scalar::from_uint(&k) - Scalar::from_digest(&h) * Scalar::from_uint(private.scalar());
    k.zeroize();

    debug!(len = message.len(), "message signed");

    Signature { h, z }
}

/// Verifies `signature` on `message` against `public`.
///
/// Returns `false` for any mismatch; the challenge comparison runs in
/// constant time.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> bool {
    let u = Point::GENERATOR.multiply_scalar(&signature.z)
        + public.point().multiply(&digest_to_uint(&signature.h));

    let valid = challenge(&u, message).ct_eq(&signature.h);

    if !valid {
        debug!(len = message.len(), "signature rejected");
    }

    valid
}
