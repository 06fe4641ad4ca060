//! Validation error kinds.
//!
//! Every kind is a recoverable user-input problem, never fatal. The
//! `Display` form of each kind is the message shown next to the offending
//! form field.

use serde::Serialize;
use thiserror::Error;

use crate::alphabet::MAX_RADIX;

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    /// The radix field is empty. Checked before any numeric comparison so
    /// an unset radix is never compared as a number.
    #[error("Radix cannot be empty.")]
    EmptyRadix,

    /// Signed mode only supports radices 2 and 10.
    #[error("Radix must be 2 or 10 in signed mode.")]
    InvalidSignedRadix,

    /// Zero or negative radix.
    #[error("Radix must be greater than zero.")]
    NonPositiveRadix,

    /// Radix beyond the digit alphabet.
    #[error("Radix must be less than or equal to {MAX_RADIX}")]
    RadixTooLarge,

    /// The value field is empty.
    #[error("Value cannot be empty.")]
    EmptyValue,

    /// The value contains symbols outside the radix's digit set.
    #[error("Value may only contain the following digits: {allowed}.{}", hyphen_hint(.allow_hyphen))]
    DisallowedDigits {
        /// Comma-separated allowed digit list, rendered into the message.
        allowed: String,
        /// Whether a leading hyphen is additionally permitted (signed
        /// decimal input).
        allow_hyphen: bool,
    },

    /// Signed binary requires a sign mode choice.
    #[error("Sign mode cannot be left blank.")]
    MissingSignMode,
}

impl ValidationError {
    /// Build the digit-set error for the given allowed digits.
    pub fn disallowed_digits(allowed: &[char], allow_hyphen: bool) -> Self {
        let allowed = allowed
            .iter()
            .map(|digit| digit.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        ValidationError::DisallowedDigits {
            allowed,
            allow_hyphen,
        }
    }
}

fn hyphen_hint(allow_hyphen: &bool) -> &'static str {
    if *allow_hyphen {
        " Value may start with a hyphen (-)."
    } else {
        ""
    }
}
