//! Actions dispatched against the state engine.

use serde::{Deserialize, Serialize};

use crate::enums::SignMode;

/// A user action. Each variant maps to one field-level edit on the form;
/// the reducer owns every cross-field consequence.
///
/// The serialized form uses a `type` tag with kebab-case variant names and
/// camelCase payload fields, e.g.
/// `{"type":"set-input-radix","inputRadix":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Action {
    /// Replace the input value and mark it dirty.
    SetValue { value: String },
    /// Set the source radix. Resets both sign modes; under signed mode the
    /// target radix is forced to the complementary one of {2, 10}.
    SetInputRadix { input_radix: Option<i64> },
    /// Set the target radix; symmetric to `SetInputRadix`.
    SetOutputRadix { output_radix: Option<i64> },
    /// Toggle signed mode. Resets both sign modes and, when enabling,
    /// snaps both radices into the allowed set and forces them distinct.
    SetSignedMode { signed_mode: bool },
    /// Choose the input-side binary sign convention.
    SetInputSignMode { input_sign_mode: Option<SignMode> },
    /// Choose the output-side binary sign convention.
    SetOutputSignMode { output_sign_mode: Option<SignMode> },
    /// Exchange input and output radices (and sign modes under signed
    /// mode). The caller passes the previously computed output string so
    /// it becomes the new input value; `None` keeps the current value.
    Swap { output_value: Option<String> },
}
