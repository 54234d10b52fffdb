//! Byte quantities with binary unit suffixes (`10G`, `512k`, `1024`).

use crate::error::{Result, ThrottlerError};

/// Multiplier for a unit suffix. Unknown suffixes count as plain bytes.
pub fn unit_factor(unit: char) -> u64 {
    match unit {
        'k' | 'K' => 1 << 10,
        'm' | 'M' => 1 << 20,
        'g' | 'G' => 1 << 30,
        't' | 'T' => 1 << 40,
        _ => 1,
    }
}

/// Parse a decimal byte count with an optional single-character unit.
///
/// Only the first character after the digits is looked at; anything after it
/// is ignored. An unrecognized unit character is accepted with a multiplier
/// of 1. Values that do not fit in a `u64` are rejected.
pub fn parse_byte_quantity(input: &str) -> Result<u64> {
    let trimmed = input.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    if digits_end == 0 {
        return Err(ThrottlerError::invalid_quantity(input));
    }

    let value: u64 = trimmed[..digits_end]
        .parse()
        .map_err(|_| ThrottlerError::invalid_quantity(input))?;

    let factor = trimmed[digits_end..].chars().next().map_or(1, unit_factor);

    value
        .checked_mul(factor)
        .ok_or_else(|| ThrottlerError::invalid_quantity(input))
}
