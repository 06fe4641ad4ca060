use thiserror::Error;

/// Conversion engine failures.
///
/// `InvalidState` guards the `convert` precondition; the remaining kinds
/// are only reachable when the converters are driven directly, outside
/// the validated path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// `convert` was called on a state that fails validation.
    #[error("conversion requires a state that passes validation")]
    InvalidState,

    /// Radix outside `1..=36`.
    #[error("radix {0} is outside the supported range 1..=36")]
    RadixOutOfRange(i64),

    /// A symbol with no value in the given radix.
    #[error("symbol {symbol:?} has no value in radix {radix}")]
    InvalidDigit { symbol: char, radix: i64 },

    /// The value does not fit the engine's 128-bit arithmetic.
    #[error("value exceeds the supported numeric range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
