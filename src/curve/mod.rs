//! Elliptic curve arithmetic.
//!
//! Each submodule implements one curve end to end: its base field, its
//! scalar field and its group law. Protocols built on a curve live in
//! `keys`, `encryption` and `signatures`.

pub mod e521;
