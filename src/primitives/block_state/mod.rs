//! 512-bit register primitive
//!
//! `BlockState` is the value both cipher cores start from. It is a plain
//! word array with explicit little-endian serialization, so its byte form is
//! identical on every host.

mod conv;
mod core;

pub use self::core::BlockState;
