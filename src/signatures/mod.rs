//! Digital signature schemes.
//!
//! This module groups implementations of digital signature algorithms
//! built on top of the crate's curve arithmetic and KMAC layer.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its signing logic and verification rules. Key material
//! lives in `keys`.

pub mod schnorr;

pub use schnorr::Signature;
