//! Hash algorithms exposed by the crate.
//!
//! Currently includes the Blake2s compression core and a one-shot
//! Blake2s-256 digest.

pub mod blake2s;

/// Re-export of the Blake2s-256 convenience function.
pub use blake2s::blake2s;
