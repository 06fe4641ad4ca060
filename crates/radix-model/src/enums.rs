//! Sign conventions for binary signed values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Convention for encoding a negative value in binary.
///
/// Only meaningful when signed mode is on and the relevant radix is 2.
/// Decimal negatives are always written with a literal leading hyphen and
/// carry no sign mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignMode {
    /// Top bit carries the sign, remaining bits carry the magnitude.
    SignAndMagnitude,
    /// Negative values are the bitwise complement of the magnitude.
    OnesComplement,
    /// Negative values are the bitwise complement of the magnitude plus one.
    TwosComplement,
}

impl SignMode {
    /// All sign modes, in presentation order.
    pub const ALL: [SignMode; 3] = [
        SignMode::SignAndMagnitude,
        SignMode::OnesComplement,
        SignMode::TwosComplement,
    ];

    /// Canonical kebab-case name, as used in serialized actions and state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignMode::SignAndMagnitude => "sign-and-magnitude",
            SignMode::OnesComplement => "ones-complement",
            SignMode::TwosComplement => "twos-complement",
        }
    }

    /// Human-readable label for presentation surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            SignMode::SignAndMagnitude => "Sign and magnitude",
            SignMode::OnesComplement => "One's complement",
            SignMode::TwosComplement => "Two's complement",
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SignMode {
    type Err = String;

    /// Parse a sign mode from its kebab-case name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "sign-and-magnitude" => Ok(SignMode::SignAndMagnitude),
            "ones-complement" => Ok(SignMode::OnesComplement),
            "twos-complement" => Ok(SignMode::TwosComplement),
            _ => Err(format!("Unknown sign mode: {s}")),
        }
    }
}
