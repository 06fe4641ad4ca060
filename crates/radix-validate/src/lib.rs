//! Field validation for the conversion form.
//!
//! Each validator returns `Option<ValidationError>` — `None` means the
//! field is fine. Validators are queried independently per field so a
//! front-end can surface a message next to each input; [`validate_state`]
//! bundles all five checks into one report.
//!
//! ## Rules
//!
//! - **Radix**: present, positive, at most 36; restricted to {2, 10} under
//!   signed mode. Emptiness is reported before any numeric comparison.
//! - **Value**: non-empty, digits drawn from the radix's allowed set.
//!   Signed decimal additionally permits one leading hyphen (an isolated
//!   `-` is invalid). An invalid radix suppresses value checks so one
//!   root cause produces one message.
//! - **Sign mode**: required exactly for signed binary.

use std::fmt;

use serde::Serialize;

use radix_model::{ConversionState, MAX_RADIX, SignMode, ValidationError};

pub use radix_model::alphabet::allowed_digits;

/// Validate a radix field.
pub fn validate_radix(radix: Option<i64>, signed_mode: bool) -> Option<ValidationError> {
    let radix = match radix {
        None => return Some(ValidationError::EmptyRadix),
        Some(radix) => radix,
    };

    if signed_mode && radix != 2 && radix != 10 {
        return Some(ValidationError::InvalidSignedRadix);
    }

    if radix <= 0 {
        return Some(ValidationError::NonPositiveRadix);
    }

    if radix > MAX_RADIX {
        return Some(ValidationError::RadixTooLarge);
    }

    None
}

/// Validate a sign mode choice for one side of the form.
///
/// A sign mode is only required for signed binary; radix 10 carries its
/// sign as a literal hyphen, and unsigned mode has no sign at all.
pub fn validate_sign_mode(
    sign_mode: Option<SignMode>,
    radix: Option<i64>,
    signed_mode: bool,
) -> Option<ValidationError> {
    if signed_mode && radix == Some(2) && sign_mode.is_none() {
        return Some(ValidationError::MissingSignMode);
    }

    None
}

/// Validate the input value against the source radix.
pub fn validate_value(
    value: &str,
    input_radix: Option<i64>,
    signed_mode: bool,
) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::EmptyValue);
    }

    // A broken radix already has its own message; checking digits against
    // it would only cascade.
    if validate_radix(input_radix, signed_mode).is_some() {
        return None;
    }

    let allowed = allowed_digits(input_radix);
    let contains_only_allowed =
        |s: &str| s.chars().all(|c| allowed.contains(&c.to_ascii_uppercase()));

    if signed_mode && input_radix == Some(10) {
        if contains_only_allowed(value) {
            return None;
        }
        if let Some(rest) = value.strip_prefix('-') {
            if !rest.is_empty() && contains_only_allowed(rest) {
                return None;
            }
        }
        return Some(ValidationError::disallowed_digits(&allowed, true));
    }

    if contains_only_allowed(value) {
        None
    } else {
        Some(ValidationError::disallowed_digits(&allowed, false))
    }
}

/// The form field a validation issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Value,
    InputRadix,
    OutputRadix,
    InputSignMode,
    OutputSignMode,
}

impl Field {
    /// Stable field identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Value => "value",
            Field::InputRadix => "inputRadix",
            Field::OutputRadix => "outputRadix",
            Field::InputSignMode => "inputSignMode",
            Field::OutputSignMode => "outputSignMode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldIssue {
    /// The user-facing message for this issue.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Validation report for the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    /// True when no field has an issue.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    /// Issue for a single field, if any.
    pub fn for_field(&self, field: Field) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }

    /// All user-facing messages, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(FieldIssue::message).collect()
    }
}

/// Run all five field validators against the state.
pub fn validate_state(state: &ConversionState) -> ValidationReport {
    let mut issues = Vec::new();
    let mut push = |field: Field, error: Option<ValidationError>| {
        if let Some(error) = error {
            issues.push(FieldIssue { field, error });
        }
    };

    push(
        Field::InputRadix,
        validate_radix(state.input_radix, state.signed_mode),
    );
    push(
        Field::OutputRadix,
        validate_radix(state.output_radix, state.signed_mode),
    );
    push(
        Field::Value,
        validate_value(&state.value, state.input_radix, state.signed_mode),
    );
    push(
        Field::InputSignMode,
        validate_sign_mode(state.input_sign_mode, state.input_radix, state.signed_mode),
    );
    push(
        Field::OutputSignMode,
        validate_sign_mode(state.output_sign_mode, state.output_radix, state.signed_mode),
    );

    ValidationReport { issues }
}

/// True when every field passes validation and conversion may proceed.
pub fn is_valid(state: &ConversionState) -> bool {
    validate_state(state).is_valid()
}
