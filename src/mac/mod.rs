//! Keyed Keccak constructions.
//!
//! This module builds the MAC / XOF layer on top of cSHAKE256:
//!
//! - `kmac`: KMAC256 and KMACXOF256
//! - `labels`: the customization strings that separate every use of
//!   KMACXOF256 in the crate
//! - `tag`: message digests and passphrase authentication tags
//!
//! Both KMAC functions are deterministic keyed pseudorandom functions;
//! everything above this layer (key derivation, keystreams, tags, nonces)
//! differs only in key, input and customization string.

mod kmac;
pub mod labels;
mod tag;

pub use kmac::{kmac256, kmacxof256, kmacxof256_512};
pub use tag::{auth_tag, hash, verify_auth_tag};
