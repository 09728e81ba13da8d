//! Error type shared by every fallible operation of the crate.
//!
//! Expected failure paths (a tag that does not match, an x-coordinate
//! without a curve point) are ordinary variants of [`Error`] and are
//! returned through [`Result`]. Presentation and retry policy belong to the
//! caller. Signature verification is the one exception: a mismatch is a
//! normal outcome and is reported as `false`.

use thiserror::Error;

/// Errors produced by the sponge, curve and protocol layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An integer passed to `left_encode` / `right_encode` is not below
    /// 2²⁰⁴⁰.
    #[error("integer does not fit in 255 bytes and cannot be length-encoded")]
    EncodingOutOfRange,

    /// The authentication tag recomputed during decryption does not match
    /// the one carried by the cryptogram.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// No y-coordinate exists for the requested x-coordinate and parity.
    #[error("no curve point exists for the given x-coordinate and parity")]
    NoSuchPoint,

    /// The coordinates do not satisfy the curve equation.
    #[error("coordinates do not lie on the curve")]
    NotOnCurve,

    /// A public key is the neutral element or lies outside the subgroup of
    /// order `r`.
    #[error("public key is not in the prime-order subgroup")]
    InvalidPublicKey,

    /// A serialized object is truncated, oversized or otherwise invalid.
    #[error("malformed encoding: {0}")]
    Malformed(&'static str),

    /// A serialized object carries a format version this crate does not
    /// understand.
    #[error("unsupported encoding version {0}")]
    UnsupportedVersion(u8),

    /// The operating system could not provide entropy.
    #[error("operating system entropy source failed")]
    Entropy,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
