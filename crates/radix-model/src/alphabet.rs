//! The digit symbol table shared by converters and validators.
//!
//! The index of a symbol is its numeric value, so radix `r` uses exactly
//! the first `r` symbols. This caps the supported radix at 36.

/// Ordered digit symbols. Index equals numeric value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest supported radix (one symbol per digit value).
pub const MAX_RADIX: i64 = 36;

/// Numeric value of a digit symbol, if it is one of the 36 known symbols.
///
/// Lookup is case-insensitive: `a` and `A` both map to 10.
pub fn digit_value(symbol: char) -> Option<u32> {
    let upper = symbol.to_ascii_uppercase();
    ALPHABET.chars().position(|s| s == upper).map(|i| i as u32)
}

/// Digit symbol for a value in `0..36`.
pub fn symbol_for(value: u32) -> Option<char> {
    ALPHABET.chars().nth(value as usize)
}

/// Digits usable in the given radix, in value order.
///
/// Radix 1 is unary tally notation: its only digit is `1`, not `0`.
/// An unset radix has no allowed digits.
pub fn allowed_digits(radix: Option<i64>) -> Vec<char> {
    match radix {
        None => Vec::new(),
        Some(1) => vec!['1'],
        Some(radix) => {
            let count = radix.clamp(0, MAX_RADIX) as usize;
            ALPHABET.chars().take(count).collect()
        }
    }
}
