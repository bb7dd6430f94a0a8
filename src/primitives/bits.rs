//! Word-splitting helpers.
//!
//! The 512-bit register carries its 64-bit counter and nonce as two
//! consecutive 32-bit words, low word first. These helpers are the only
//! place that encoding is spelled out.

/// Joins two 32-bit halves into a 64-bit value.
#[inline(always)]
pub const fn combine(low: u32, high: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Returns the low 32 bits of `value`.
#[inline(always)]
pub const fn low(value: u64) -> u32 {
    value as u32
}

/// Returns the high 32 bits of `value`.
#[inline(always)]
pub const fn high(value: u64) -> u32 {
    (value >> 32) as u32
}

/// Splits `value` into `(low, high)` halves.
#[inline(always)]
pub const fn split(value: u64) -> (u32, u32) {
    (low(value), high(value))
}
