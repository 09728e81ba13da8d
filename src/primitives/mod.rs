//! Primitive types
//!
//! This module defines the low-level integer primitive used by the curve
//! and scalar arithmetic of the crate.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full-featured
//! big-integer library: every operation is either explicitly wrapping or
//! reports its overflow, and modular reduction is always performed by the
//! caller.
//!
//! Current primitives:
//! - `U576`: a fixed-size 576-bit unsigned integer, wide enough to hold any
//!   element of the E-521 base field or scalar field.

mod u576;

/// Fixed-size unsigned integer primitive.
pub use u576::U576;
