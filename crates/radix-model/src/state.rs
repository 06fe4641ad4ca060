//! Application state owned by the front-end collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::SignMode;

/// The whole conversion form as one value.
///
/// The state is only ever changed through the reducer, which returns a
/// fresh `ConversionState` per action instead of mutating fields in place.
/// That keeps the cross-field invariants (signed radices restricted to
/// {2, 10} and forced complementary, sign modes reset on radix changes)
/// intact at every observable boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionState {
    /// Raw input digit string, stored as typed; comparisons upper-case it.
    pub value: String,
    /// True once `value` has been explicitly set. Front-ends use this to
    /// avoid flagging an untouched form.
    pub is_value_dirty: bool,
    /// Source radix. `None` while the field is empty; `Some(0)` is a
    /// present-but-invalid entry, which is a different thing.
    pub input_radix: Option<i64>,
    /// Target radix, same conventions as `input_radix`.
    pub output_radix: Option<i64>,
    /// Whether negative values are representable at all.
    pub signed_mode: bool,
    /// Binary sign convention for the input side. Only meaningful when
    /// `signed_mode` is on and `input_radix` is 2.
    pub input_sign_mode: Option<SignMode>,
    /// Binary sign convention for the output side.
    pub output_sign_mode: Option<SignMode>,
}

impl Default for ConversionState {
    /// The initial form: empty pristine value, binary to hexadecimal,
    /// unsigned.
    fn default() -> Self {
        Self {
            value: String::new(),
            is_value_dirty: false,
            input_radix: Some(2),
            output_radix: Some(16),
            signed_mode: false,
            input_sign_mode: None,
            output_sign_mode: None,
        }
    }
}

/// A decoded number: non-negative magnitude plus a separate sign flag.
///
/// Intermediate between decoding and re-encoding; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedDecimalValue {
    /// Absolute value.
    pub magnitude: u128,
    /// Sign flag. A magnitude of zero may still carry `negative = true`
    /// (a decimal input of `-0` does exactly that).
    pub negative: bool,
}

impl SignedDecimalValue {
    /// A non-negative value.
    pub fn positive(magnitude: u128) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }

    /// A negative value of the given magnitude.
    pub fn negative(magnitude: u128) -> Self {
        Self {
            magnitude,
            negative: true,
        }
    }
}
