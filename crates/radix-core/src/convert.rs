//! Whole-state conversion.

use tracing::debug;

use radix_model::ConversionState;
use radix_validate::is_valid;

use crate::error::{ConvertError, Result};
use crate::signed::{decode_signed, encode_signed};

/// Convert the state's value from the input settings to the output
/// settings.
///
/// The state must pass validation first: a state that does not validate
/// fails with [`ConvertError::InvalidState`] instead of producing
/// nonsense output.
pub fn convert(state: &ConversionState) -> Result<String> {
    if !is_valid(state) {
        return Err(ConvertError::InvalidState);
    }

    // Validation guarantees both radices are present.
    let input_radix = state.input_radix.ok_or(ConvertError::InvalidState)?;
    let output_radix = state.output_radix.ok_or(ConvertError::InvalidState)?;

    let value = state.value.to_uppercase();
    let decoded = decode_signed(&value, input_radix, state.signed_mode, state.input_sign_mode)?;
    debug!(
        magnitude = %decoded.magnitude,
        negative = decoded.negative,
        input_radix,
        output_radix,
        "decoded input value"
    );

    encode_signed(
        decoded,
        output_radix,
        state.signed_mode,
        state.output_sign_mode,
    )
}
