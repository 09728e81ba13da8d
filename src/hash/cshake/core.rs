//! cSHAKE256 customizable extendable-output function (NIST SP 800-185).
//!
//! cSHAKE256 is SHAKE256 with two extra inputs:
//!
//! - `N`, a function-name string reserved for NIST-defined functions
//!   (KMAC uses `"KMAC"`)
//! - `S`, a customization string chosen by the application
//!
//! The pair is framed as `bytepad(encode_string(N) ‖ encode_string(S), 136)`
//! and absorbed before the message. When both strings are empty, cSHAKE256
//! is defined to be exactly SHAKE256, which uses no prefix and the SHAKE
//! domain suffix.

use super::encoding::{bytepad, encode_string};
use crate::hash::keccak::Sponge;

/// Sponge rate of the 256-bit security variants, in bytes.
pub const RATE: usize = 136;

/// Domain suffix and first padding bit for SHAKE (`1111` + pad).
const SHAKE_SUFFIX: u8 = 0x1f;

/// Domain suffix and first padding bit for cSHAKE (`00` + pad).
const CSHAKE_SUFFIX: u8 = 0x04;

/// Incremental cSHAKE256 hasher.
///
/// The hasher is consumed by finalization, so a sponge state can never be
/// reused across two computations.
#[derive(Clone)]
pub struct CShake256 {
    sponge: Sponge,
    suffix: u8,
}

impl CShake256 {
    /// Creates a hasher for function name `function_name` and
    /// customization `customization`.
    pub fn new(function_name: &[u8], customization: &[u8]) -> Self {
        let mut sponge = Sponge::new(RATE);

        if function_name.is_empty() && customization.is_empty() {
            return Self {
                sponge,
                suffix: SHAKE_SUFFIX,
            };
        }

        let mut prefix = encode_string(function_name);
        prefix.extend_from_slice(&encode_string(customization));
        sponge.absorb(&bytepad(&prefix, RATE));

        Self {
            sponge,
            suffix: CSHAKE_SUFFIX,
        }
    }

    /// Absorbs more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Finishes the computation and fills `out` with output bytes.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        self.sponge.finalize(self.suffix);
        self.sponge.squeeze(out);
    }

    /// Finishes the computation and returns `bits / 8` output bytes.
    ///
    /// # Panics
    /// Panics if `bits` is not a multiple of 8.
    pub fn finalize(self, bits: usize) -> Vec<u8> {
        assert!(bits % 8 == 0, "output length must be a multiple of 8 bits");

        let mut out = vec![0u8; bits / 8];
        self.finalize_into(&mut out);
        out
    }
}

/// Computes `cSHAKE256(X, L, N, S)`.
///
/// # Parameters
/// - `x`: main input, any length
/// - `bits`: requested output length `L` in bits
/// - `function_name`: `N`, empty unless implementing a NIST function
/// - `customization`: `S`, the domain-separation string
///
/// # Panics
/// Panics if `bits` is not a multiple of 8.
pub fn cshake256(x: &[u8], bits: usize, function_name: &[u8], customization: &[u8]) -> Vec<u8> {
    let mut hasher = CShake256::new(function_name, customization);
    hasher.update(x);
    hasher.finalize(bits)
}

/// Computes `SHAKE256(X, L)`.
///
/// # Panics
/// Panics if `bits` is not a multiple of 8.
pub fn shake256(x: &[u8], bits: usize) -> Vec<u8> {
    cshake256(x, bits, b"", b"")
}
