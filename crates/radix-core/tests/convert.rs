//! End-to-end conversion tests plus round-trip properties.

use proptest::prelude::{Just, Strategy, prop_assert_eq, prop_oneof, proptest};

use radix_core::{ConvertError, convert, decode_signed, decode_unsigned, encode_signed, encode_unsigned};
use radix_model::{ConversionState, SignMode, SignedDecimalValue};

fn make_state(
    value: &str,
    input_radix: i64,
    output_radix: i64,
    signed_mode: bool,
    input_sign_mode: Option<SignMode>,
    output_sign_mode: Option<SignMode>,
) -> ConversionState {
    ConversionState {
        value: value.to_string(),
        is_value_dirty: true,
        input_radix: Some(input_radix),
        output_radix: Some(output_radix),
        signed_mode,
        input_sign_mode,
        output_sign_mode,
    }
}

#[test]
fn binary_to_decimal_unsigned() {
    let state = make_state("1010", 2, 10, false, None, None);
    assert_eq!(convert(&state).unwrap(), "10");
}

#[test]
fn binary_to_hexadecimal_lowercase_input() {
    let state = make_state("11111111", 2, 16, false, None, None);
    assert_eq!(convert(&state).unwrap(), "FF");

    let state = make_state("ff", 16, 2, false, None, None);
    assert_eq!(convert(&state).unwrap(), "11111111");
}

#[test]
fn unary_conversions() {
    let state = make_state("11111", 1, 10, false, None, None);
    assert_eq!(convert(&state).unwrap(), "5");

    let state = make_state("5", 10, 1, false, None, None);
    assert_eq!(convert(&state).unwrap(), "11111");
}

#[test]
fn signed_twos_complement_binary_to_decimal() {
    // 1010 has the top bit set: unsigned 10 >= 8, so it decodes to -6.
    let state = make_state(
        "1010",
        2,
        10,
        true,
        Some(SignMode::TwosComplement),
        None,
    );
    assert_eq!(convert(&state).unwrap(), "-6");
}

#[test]
fn signed_decimal_to_binary_per_mode() {
    let cases = [
        (SignMode::TwosComplement, "-6", "1010"),
        (SignMode::OnesComplement, "-6", "1001"),
        (SignMode::SignAndMagnitude, "-6", "1110"),
        (SignMode::TwosComplement, "6", "0110"),
    ];

    for (mode, input, expected) in cases {
        let state = make_state(input, 10, 2, true, None, Some(mode));
        assert_eq!(convert(&state).unwrap(), expected, "{input} as {mode}");
    }
}

#[test]
fn convert_rejects_invalid_state() {
    // Digit outside the radix.
    let state = make_state("1012", 2, 10, false, None, None);
    assert_eq!(convert(&state), Err(ConvertError::InvalidState));

    // Signed binary without a sign mode.
    let state = make_state("1010", 2, 10, true, None, None);
    assert_eq!(convert(&state), Err(ConvertError::InvalidState));

    // Signed mode with a radix outside {2, 10}.
    let state = make_state("FF", 16, 10, true, None, None);
    assert_eq!(convert(&state), Err(ConvertError::InvalidState));

    // Missing radix.
    let mut state = make_state("1010", 2, 10, false, None, None);
    state.output_radix = None;
    assert_eq!(convert(&state), Err(ConvertError::InvalidState));
}

#[test]
fn canonical_form_strips_leading_zeros() {
    let decoded = decode_unsigned("0011", 2).unwrap();
    assert_eq!(encode_unsigned(decoded, 2).unwrap(), "11");

    let decoded = decode_unsigned("000", 10).unwrap();
    assert_eq!(encode_unsigned(decoded, 10).unwrap(), "0");
}

fn radix_and_value() -> impl Strategy<Value = (i64, u128)> {
    (2i64..=36).prop_flat_map(|radix| {
        let max = (radix as u128).pow(6);
        (Just(radix), 0u128..=max)
    })
}

fn sign_mode() -> impl Strategy<Value = SignMode> {
    prop_oneof![
        Just(SignMode::SignAndMagnitude),
        Just(SignMode::OnesComplement),
        Just(SignMode::TwosComplement),
    ]
}

proptest! {
    #[test]
    fn unsigned_round_trip((radix, n) in radix_and_value()) {
        let encoded = encode_unsigned(n, radix).unwrap();
        prop_assert_eq!(decode_unsigned(&encoded, radix).unwrap(), n);
    }

    #[test]
    fn unary_round_trip(n in 1u128..=4096) {
        let encoded = encode_unsigned(n, 1).unwrap();
        prop_assert_eq!(encoded.chars().count() as u128, n);
        prop_assert_eq!(decode_unsigned(&encoded, 1).unwrap(), n);
    }

    #[test]
    fn signed_negative_round_trip(magnitude in 1u128..=1_000_000, mode in sign_mode()) {
        let value = SignedDecimalValue::negative(magnitude);
        let encoded = encode_signed(value, 2, true, Some(mode)).unwrap();
        prop_assert_eq!(decode_signed(&encoded, 2, true, Some(mode)).unwrap(), value);
    }

    #[test]
    fn signed_positive_round_trip(magnitude in 0u128..=1_000_000, mode in sign_mode()) {
        let value = SignedDecimalValue::positive(magnitude);
        let encoded = encode_signed(value, 2, true, Some(mode)).unwrap();
        prop_assert_eq!(decode_signed(&encoded, 2, true, Some(mode)).unwrap(), value);
    }
}
