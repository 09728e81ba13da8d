//! cSHAKE256 and the SP 800-185 encoding helpers.

pub mod core;
pub mod encoding;

pub use self::core::{CShake256, RATE, cshake256, shake256};
pub use encoding::{
    bytepad, encode_string, left_encode, left_encode_be, right_encode, right_encode_be,
};
