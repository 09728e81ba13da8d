//! Versioned binary encoding of protocol objects.
//!
//! Every encoded object starts with a two-byte header:
//!
//! ```text
//! version (1 byte, 0x01) ‖ kind (1 byte) ‖ fields
//! ```
//!
//! Fields use fixed layouts:
//!
//! | Field       | Encoding                                      |
//! |-------------|-----------------------------------------------|
//! | point       | `x ‖ y`, two 66-byte big-endian coordinates   |
//! | scalar      | 66 bytes big-endian, below `r`                |
//! | digest/tag  | 64 raw bytes                                  |
//! | byte string | `u32` big-endian length, then the bytes       |
//!
//! | Kind | Object       | Fields                 |
//! |------|--------------|------------------------|
//! | 1    | `PublicKey`  | `V`                    |
//! | 2    | `Cryptogram` | `Z`, `c`, `t`          |
//! | 3    | `Signature`  | `h`, `z`               |
//!
//! Decoding rejects unknown versions and kinds, truncated input, trailing
//! bytes, non-canonical coordinates or scalars and points off the curve.
//! A decoded public key must also be a non-neutral point of the subgroup of
//! order `r`.

use crate::curve::e521::{POINT_BYTES, Point, SCALAR_BYTES, Scalar};
use crate::encryption::Cryptogram;
use crate::error::{Error, Result};
use crate::keys::e521::PublicKey;
use crate::signatures::Signature;

/// Current format version.
pub const VERSION: u8 = 0x01;

/// Object kinds carried in the second header byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Kind {
    /// An E-521 public key.
    PublicKey = 1,
    /// A cryptogram produced by public-key encryption.
    Cryptogram = 2,
    /// A Schnorr signature.
    Signature = 3,
}

/// Types with a versioned binary encoding.
pub trait Encode {
    /// Kind byte written after the version.
    const KIND: Kind;

    /// Writes the fields, without header.
    fn encode_fields(&self, out: &mut Writer);

    /// Returns the full encoding, header included.
    fn encode(&self) -> Vec<u8> {
        let mut out = Writer::default();
        out.put_u8(VERSION);
        out.put_u8(Self::KIND as u8);
        self.encode_fields(&mut out);
        out.into_bytes()
    }
}

/// Types that can be read back from their versioned binary encoding.
pub trait Decode: Encode + Sized {
    /// Reads the fields, without header.
    fn decode_fields(input: &mut Reader<'_>) -> Result<Self>;

    /// Parses a full encoding, header included.
    fn decode(bytes: &[u8]) -> Result<Self> {
        let mut input = Reader::new(bytes);

        let version = input.get_u8()?;
        if version != VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        if input.get_u8()? != Self::KIND as u8 {
            return Err(Error::Malformed("unexpected object kind"));
        }

        let value = Self::decode_fields(&mut input)?;
        input.finish()?;

        Ok(value)
    }
}

/// Append-only output buffer.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Writes a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes `bytes` as is, without a length prefix.
    pub fn put_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a `u32` length prefix followed by `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is longer than `u32::MAX`.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        let len = bytes.len();
        assert!(len <= u32::MAX as usize, "byte string longer than u32::MAX");

        self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the 132-byte encoding `x ‖ y` of `point`.
    pub fn put_point(&mut self, point: &Point) {
        self.put_raw(&point.to_bytes());
    }

    /// Writes the 66-byte big-endian encoding of `scalar`.
    pub fn put_scalar(&mut self, scalar: &Scalar) {
        self.put_raw(&scalar.to_bytes());
    }

    /// Consumes the writer and returns everything written so far.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over an input buffer.
#[derive(Debug)]
pub struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Starts reading at the beginning of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.input.len() < len {
            return Err(Error::Malformed("truncated input"));
        }

        let (head, tail) = self.input.split_at(len);
        self.input = tail;

        Ok(head)
    }

    /// Reads a single byte.
    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads exactly `N` raw bytes.
    pub fn get_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Reads a `u32` length prefix and that many bytes.
    pub fn get_bytes(&mut self) -> Result<&'a [u8]> {
        let len = u32::from_be_bytes(self.get_array::<4>()?);
        let len = usize::try_from(len).map_err(|_| Error::Malformed("length overflows usize"))?;

        self.take(len)
    }

    /// Reads a point, rejecting non-canonical coordinates and points off
    /// the curve.
    pub fn get_point(&mut self) -> Result<Point> {
        Point::from_bytes(&self.get_array::<POINT_BYTES>()?)
    }

    /// Reads a scalar, rejecting values that are not below `r`.
    pub fn get_scalar(&mut self) -> Result<Scalar> {
        Scalar::from_bytes(&self.get_array::<SCALAR_BYTES>()?)
    }

    /// Fails unless every byte was consumed.
    pub fn finish(self) -> Result<()> {
        if !self.input.is_empty() {
            return Err(Error::Malformed("trailing bytes"));
        }

        Ok(())
    }
}

impl Encode for PublicKey {
    const KIND: Kind = Kind::PublicKey;

    fn encode_fields(&self, out: &mut Writer) {
        out.put_point(self.point());
    }
}

impl Decode for PublicKey {
    fn decode_fields(input: &mut Reader<'_>) -> Result<Self> {
        PublicKey::from_point(input.get_point()?)
    }
}

impl Encode for Cryptogram {
    const KIND: Kind = Kind::Cryptogram;

    fn encode_fields(&self, out: &mut Writer) {
        out.put_point(self.z());
        out.put_bytes(self.ciphertext());
        out.put_raw(self.tag());
    }
}

impl Decode for Cryptogram {
    fn decode_fields(input: &mut Reader<'_>) -> Result<Self> {
        let z = input.get_point()?;
        let c = input.get_bytes()?.to_vec();
        let t = input.get_array::<64>()?;

        Ok(Cryptogram::from_parts(z, c, t))
    }
}

impl Encode for Signature {
    const KIND: Kind = Kind::Signature;

    fn encode_fields(&self, out: &mut Writer) {
        out.put_raw(self.h());
        out.put_scalar(self.z());
    }
}

impl Decode for Signature {
    fn decode_fields(input: &mut Reader<'_>) -> Result<Self> {
        let h = input.get_array::<64>()?;
        let z = input.get_scalar()?;

        Ok(Signature::from_parts(h, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let encoded = PublicKey::from_point(Point::GENERATOR).unwrap().encode();

        assert_eq!(encoded.len(), 2 + POINT_BYTES);
        assert_eq!(encoded[0], VERSION);
        assert_eq!(encoded[1], Kind::PublicKey as u8);
    }

    #[test]
    fn reader_rejects_truncated_length_prefix() {
        let mut input = Reader::new(&[0, 0, 0, 5, 1, 2]);
        assert_eq!(input.get_bytes(), Err(Error::Malformed("truncated input")));
    }
}
