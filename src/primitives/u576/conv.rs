//! Conversions between `U576` and byte / integer representations
//!
//! All byte conversions are **big-endian**, matching the way KMAC outputs
//! and curve coordinates are interpreted as integers.

use super::core::{LIMBS, U576};

/// Number of bytes in the full big-endian encoding of a `U576`.
pub(crate) const BYTES: usize = LIMBS * 8;

impl U576 {
    /// Interprets a big-endian byte string as an unsigned integer.
    ///
    /// Leading zero bytes are ignored, so inputs longer than 72 bytes are
    /// accepted as long as the value itself fits.
    ///
    /// # Returns
    /// `None` if the value needs more than 576 bits.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];

        if significant.len() > BYTES {
            return None;
        }

        let mut limbs = [0u64; LIMBS];

        for (k, &byte) in significant.iter().rev().enumerate() {
            limbs[k / 8] |= (byte as u64) << (8 * (k % 8));
        }

        Some(Self(limbs))
    }

    /// Returns the full 72-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; BYTES] {
        let mut out = [0u8; BYTES];

        for (i, limb) in self.0.iter().enumerate() {
            let end = BYTES - 8 * i;
            out[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }

        out
    }

    /// Returns the `N` least significant bytes in big-endian order.
    ///
    /// Used for fixed-width encodings narrower than 72 bytes (66-byte
    /// coordinates and scalars). Any bytes above the first `N` must be
    /// zero for the encoding to be lossless.
    ///
    /// # Panics
    /// Panics if `N > 72`.
    pub fn to_be_array<const N: usize>(&self) -> [u8; N] {
        assert!(N <= BYTES, "U576 holds at most 72 bytes");

        let full = self.to_be_bytes();
        debug_assert!(full[..BYTES - N].iter().all(|&b| b == 0));

        let mut out = [0u8; N];
        out.copy_from_slice(&full[BYTES - N..]);
        out
    }
}

/// Converts a `u64` into a `U576`.
impl From<u64> for U576 {
    fn from(value: u64) -> Self {
        U576::from_u64(value)
    }
}

/// Converts a 72-byte big-endian array into a `U576`.
impl From<[u8; BYTES]> for U576 {
    fn from(value: [u8; BYTES]) -> Self {
        let mut limbs = [0u64; LIMBS];

        for (i, limb) in limbs.iter_mut().enumerate() {
            let end = BYTES - 8 * i;
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&value[end - 8..end]);
            *limb = u64::from_be_bytes(chunk);
        }

        U576(limbs)
    }
}

/// Attempts to convert a `U576` into a `u64`.
///
/// The conversion succeeds only if the upper 512 bits are zero.
impl TryFrom<U576> for u64 {
    type Error = ();

    fn try_from(value: U576) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[0])
    }
}
