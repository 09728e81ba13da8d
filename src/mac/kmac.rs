//! KMAC256 and KMACXOF256 (NIST SP 800-185, section 4).
//!
//! KMAC is cSHAKE256 with function name `"KMAC"`, whose input is the key
//! framed as `bytepad(encode_string(K), 136)`, followed by the message,
//! followed by an encoding of the output length:
//!
//! - KMAC256 appends `right_encode(L)`, committing to the output length
//! - KMACXOF256 appends `right_encode(0)`, making the output an unbounded
//!   stream whose prefixes agree for every `L`

use crate::hash::cshake::{CShake256, RATE, bytepad, encode_string, right_encode};

/// Function name reserved by NIST for KMAC.
const FUNCTION_NAME: &[u8] = b"KMAC";

fn keyed(key: &[u8], customization: &[u8]) -> CShake256 {
    let mut hasher = CShake256::new(FUNCTION_NAME, customization);
    hasher.update(&bytepad(&encode_string(key), RATE));
    hasher
}

/// Computes `KMACXOF256(K, X, L, S)`.
///
/// # Parameters
/// - `key`: MAC key `K`, any length (including empty)
/// - `data`: message `X`
/// - `bits`: output length `L` in bits
/// - `customization`: domain-separation string `S`
///
/// # Panics
/// Panics if `bits` is not a multiple of 8.
pub fn kmacxof256(key: &[u8], data: &[u8], bits: usize, customization: &[u8]) -> Vec<u8> {
    let mut hasher = keyed(key, customization);
    hasher.update(data);
    hasher.update(&right_encode(0));
    hasher.finalize(bits)
}

/// Computes `KMACXOF256(K, X, 512, S)` into a fixed 64-byte array.
///
/// This is the shape of every tag, challenge and derived key in the
/// protocol layer.
pub fn kmacxof256_512(key: &[u8], data: &[u8], customization: &[u8]) -> [u8; 64] {
    let mut hasher = keyed(key, customization);
    hasher.update(data);
    hasher.update(&right_encode(0));

    let mut out = [0u8; 64];
    hasher.finalize_into(&mut out);
    out
}

/// Computes `KMAC256(K, X, L, S)`.
///
/// # Panics
/// Panics if `bits` is not a multiple of 8.
pub fn kmac256(key: &[u8], data: &[u8], bits: usize, customization: &[u8]) -> Vec<u8> {
    let mut hasher = keyed(key, customization);
    hasher.update(data);
    hasher.update(&right_encode(bits as u64));
    hasher.finalize(bits)
}
