//! Signed interpretation and encoding.
//!
//! Signed values exist in exactly two shapes: binary with a chosen sign
//! convention (sign-and-magnitude, one's complement, two's complement)
//! and decimal with a literal leading hyphen. In all three binary
//! conventions a value is negative if and only if its top bit is set.

use radix_model::{SignMode, SignedDecimalValue};

use crate::error::{ConvertError, Result};
use crate::unsigned::{decode_unsigned, encode_unsigned};

/// Number of bits needed to represent the magnitude.
fn bit_len(magnitude: u128) -> u32 {
    if magnitude == 0 {
        0
    } else {
        128 - magnitude.leading_zeros()
    }
}

fn pow2(exponent: u32) -> Result<u128> {
    1u128.checked_shl(exponent).ok_or(ConvertError::Overflow)
}

/// Decode a digit string under the given sign settings.
///
/// Unsigned mode passes straight through with a positive sign. Signed
/// binary reads the top bit as the sign and undoes the chosen encoding;
/// signed decimal reads a literal leading hyphen.
pub fn decode_signed(
    digits: &str,
    radix: i64,
    signed_mode: bool,
    sign_mode: Option<SignMode>,
) -> Result<SignedDecimalValue> {
    if signed_mode && radix == 2 {
        return decode_signed_binary(digits, sign_mode);
    }

    if signed_mode && radix == 10 {
        let (negative, magnitude_digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits),
        };
        return Ok(SignedDecimalValue {
            magnitude: decode_unsigned(magnitude_digits, 10)?,
            negative,
        });
    }

    Ok(SignedDecimalValue::positive(decode_unsigned(digits, radix)?))
}

fn decode_signed_binary(digits: &str, sign_mode: Option<SignMode>) -> Result<SignedDecimalValue> {
    // Signed binary without a sign mode (or without digits) never passes
    // validation, so reaching either here is a caller bug.
    let sign_mode = sign_mode.ok_or(ConvertError::InvalidState)?;
    let width = u32::try_from(digits.chars().count()).map_err(|_| ConvertError::Overflow)?;
    if width == 0 {
        return Err(ConvertError::InvalidState);
    }

    let unsigned = decode_unsigned(digits, 2)?;
    let half = pow2(width - 1)?;
    let negative = unsigned >= half;
    if !negative {
        return Ok(SignedDecimalValue::positive(unsigned));
    }

    let magnitude = match sign_mode {
        SignMode::OnesComplement => pow2(width)? - 1 - unsigned,
        SignMode::TwosComplement => pow2(width)? - unsigned,
        SignMode::SignAndMagnitude => unsigned - half,
    };

    Ok(SignedDecimalValue::negative(magnitude))
}

/// Encode a signed value under the given sign settings.
pub fn encode_signed(
    value: SignedDecimalValue,
    radix: i64,
    signed_mode: bool,
    sign_mode: Option<SignMode>,
) -> Result<String> {
    if signed_mode && radix == 2 {
        return encode_signed_binary(value, sign_mode);
    }

    if signed_mode && radix == 10 {
        let digits = encode_unsigned(value.magnitude, 10)?;
        return Ok(if value.negative {
            format!("-{digits}")
        } else {
            digits
        });
    }

    encode_unsigned(value.magnitude, radix)
}

fn encode_signed_binary(value: SignedDecimalValue, sign_mode: Option<SignMode>) -> Result<String> {
    let sign_mode = sign_mode.ok_or(ConvertError::InvalidState)?;

    if !value.negative {
        // Positive signed values always start with a zero bit.
        return Ok(format!("0{}", encode_unsigned(value.magnitude, 2)?));
    }

    let magnitude = value.magnitude;

    // Minimal width that can hold the magnitude, plus one sign bit. Two's
    // complement spares the extra bit exactly when the magnitude is the
    // most negative value of the minimal width, i.e. a power of two.
    let mut width = bit_len(magnitude);
    if !(sign_mode == SignMode::TwosComplement && magnitude.is_power_of_two()) {
        width += 1;
    }

    let encoded = match sign_mode {
        SignMode::OnesComplement => pow2(width)? - 1 - magnitude,
        SignMode::TwosComplement => pow2(width)? - magnitude,
        SignMode::SignAndMagnitude => pow2(width - 1)? + magnitude,
    };

    encode_unsigned(encoded, 2)
}
