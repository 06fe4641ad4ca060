//! Unsigned digit-string conversion for radices 1 through 36.

use radix_model::{MAX_RADIX, digit_value, symbol_for};

use crate::error::{ConvertError, Result};

fn checked_radix(radix: i64) -> Result<u128> {
    if (1..=MAX_RADIX).contains(&radix) {
        Ok(radix as u128)
    } else {
        Err(ConvertError::RadixOutOfRange(radix))
    }
}

/// Decode a digit string as an unsigned integer in the given radix.
///
/// Digit lookup is case-insensitive. Radix 1 is tally notation: the
/// result is the digit count (the validators restrict unary values to
/// `1` symbols before conversion is reachable).
pub fn decode_unsigned(digits: &str, radix: i64) -> Result<u128> {
    let base = checked_radix(radix)?;

    if radix == 1 {
        return Ok(digits.chars().count() as u128);
    }

    let mut acc: u128 = 0;
    for symbol in digits.chars() {
        let digit = digit_value(symbol)
            .filter(|&digit| u128::from(digit) < base)
            .ok_or(ConvertError::InvalidDigit { symbol, radix })?;
        acc = acc
            .checked_mul(base)
            .and_then(|shifted| shifted.checked_add(u128::from(digit)))
            .ok_or(ConvertError::Overflow)?;
    }

    Ok(acc)
}

/// Encode an unsigned integer as a digit string in the given radix.
///
/// Zero encodes as `"0"` in every radix, radix 1 included. Radix 1
/// otherwise produces a tally of `1`s.
pub fn encode_unsigned(n: u128, radix: i64) -> Result<String> {
    let base = checked_radix(radix)?;

    if n == 0 {
        return Ok("0".to_string());
    }

    if radix == 1 {
        let count = usize::try_from(n).map_err(|_| ConvertError::Overflow)?;
        return Ok("1".repeat(count));
    }

    let mut quotient = n;
    let mut digits = Vec::new();
    while quotient > 0 {
        let remainder = (quotient % base) as u32;
        quotient /= base;
        digits.push(symbol_for(remainder).ok_or(ConvertError::RadixOutOfRange(radix))?);
    }
    digits.reverse();

    Ok(digits.into_iter().collect())
}
