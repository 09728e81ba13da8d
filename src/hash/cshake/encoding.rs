//! NIST SP 800-185 string and integer encodings.
//!
//! These helpers build the framing that cSHAKE and KMAC place around their
//! inputs so that different (function name, customization, key, data)
//! tuples can never collide:
//!
//! - `left_encode(x)`: `n ‖ x` where `x` is big-endian on `n` bytes
//! - `right_encode(x)`: `x ‖ n`
//! - `encode_string(s)`: `left_encode(8·|s|) ‖ s`
//! - `bytepad(x, w)`: `left_encode(w) ‖ x`, zero-padded to a multiple of `w`
//!
//! Integers are encoded on the minimal number of bytes, with at least one
//! byte, so `n` ranges over `1..=255` and values must be below 2²⁰⁴⁰.

use crate::error::{Error, Result};

/// Largest number of significant bytes a length-encoded integer may have.
const MAX_ENCODED_BYTES: usize = 255;

enum Side {
    Left,
    Right,
}

/// Strips leading zero bytes, keeping at least one byte.
fn significant(be: &[u8]) -> &[u8] {
    match be.iter().position(|&b| b != 0) {
        Some(start) => &be[start..],
        None if be.is_empty() => &[0],
        None => &be[be.len() - 1..],
    }
}

fn framed(digits: &[u8], side: Side) -> Vec<u8> {
    debug_assert!(!digits.is_empty() && digits.len() <= MAX_ENCODED_BYTES);

    let n = digits.len() as u8;
    let mut out = Vec::with_capacity(digits.len() + 1);

    match side {
        Side::Left => {
            out.push(n);
            out.extend_from_slice(digits);
        }
        Side::Right => {
            out.extend_from_slice(digits);
            out.push(n);
        }
    }

    out
}

/// Left-encodes an integer.
pub fn left_encode(x: u64) -> Vec<u8> {
    framed(significant(&x.to_be_bytes()), Side::Left)
}

/// Right-encodes an integer.
pub fn right_encode(x: u64) -> Vec<u8> {
    framed(significant(&x.to_be_bytes()), Side::Right)
}

/// Left-encodes an arbitrary-size integer given in big-endian bytes.
///
/// # Errors
/// Returns [`Error::EncodingOutOfRange`] if the value is not below 2²⁰⁴⁰.
pub fn left_encode_be(x: &[u8]) -> Result<Vec<u8>> {
    let digits = significant(x);

    if digits.len() > MAX_ENCODED_BYTES {
        return Err(Error::EncodingOutOfRange);
    }

    Ok(framed(digits, Side::Left))
}

/// Right-encodes an arbitrary-size integer given in big-endian bytes.
///
/// # Errors
/// Returns [`Error::EncodingOutOfRange`] if the value is not below 2²⁰⁴⁰.
pub fn right_encode_be(x: &[u8]) -> Result<Vec<u8>> {
    let digits = significant(x);

    if digits.len() > MAX_ENCODED_BYTES {
        return Err(Error::EncodingOutOfRange);
    }

    Ok(framed(digits, Side::Right))
}

/// Encodes a byte string as `left_encode(bit length) ‖ s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let bit_len = (s.len() as u128) << 3;

    let mut out = framed(significant(&bit_len.to_be_bytes()), Side::Left);
    out.extend_from_slice(s);
    out
}

/// Prepends `left_encode(w)` to `x` and zero-pads the result to a multiple
/// of `w` bytes.
///
/// # Panics
/// Panics if `w` is zero.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    assert!(w > 0, "bytepad width must be positive");

    let mut z = left_encode(w as u64);
    z.extend_from_slice(x);

    let padded_len = z.len().div_ceil(w) * w;
    z.resize(padded_len, 0);
    z
}
