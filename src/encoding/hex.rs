//! Hexadecimal message input
//!
//! Messages are typed as hex digits. Each digit expands to exactly four bits,
//! most significant first, so "0A" is `0000 1010` and leading zeros survive
//! (a numeric parse would drop them).

use crate::domain::{LineCodeError, LineCodeResult};

/// Clean up text as it is typed: drop anything that is not a hex digit and
/// uppercase the rest.
pub fn normalize_hex(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Expand hex text into bits, four per digit, MSB first.
///
/// Lower and upper case are both accepted. Any other character is an error;
/// empty text gives no bits.
pub fn hex_to_bits(hex: &str) -> LineCodeResult<Vec<bool>> {
    let mut bits = Vec::with_capacity(hex.len() * 4);
    for (position, ch) in hex.chars().enumerate() {
        let nibble = ch
            .to_digit(16)
            .ok_or(LineCodeError::InvalidHexDigit { ch, position })?;
        bits.extend((0..4).rev().map(|shift| (nibble >> shift) & 1 == 1));
    }
    Ok(bits)
}

/// Render bits as a string of '0' and '1'
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
