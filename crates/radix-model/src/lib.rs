//! Data model for positional numeral system conversion.
//!
//! This crate holds the leaf types shared by the validators, the
//! conversion engine, and front-end collaborators: the digit alphabet,
//! sign conventions, the form state, actions, radix presets, and the
//! validation error kinds.

pub mod action;
pub mod alphabet;
pub mod enums;
pub mod error;
pub mod preset;
pub mod state;

pub use action::Action;
pub use alphabet::{ALPHABET, MAX_RADIX, allowed_digits, digit_value, symbol_for};
pub use enums::SignMode;
pub use error::ValidationError;
pub use preset::{RADIX_PRESETS, RadixPreset, filtered_radix_presets, signed_radices};
pub use state::{ConversionState, SignedDecimalValue};
