//! Presentation presets for common radices.

use serde::Serialize;

/// A named radix shortcut offered by front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadixPreset {
    /// Human-readable name.
    pub name: &'static str,
    /// Stable shorthand identifier.
    pub shorthand: &'static str,
    /// The radix this preset selects; `None` means free-form entry.
    pub radix: Option<i64>,
}

/// The preset table, in presentation order.
pub const RADIX_PRESETS: [RadixPreset; 5] = [
    RadixPreset {
        name: "Binary",
        shorthand: "binary",
        radix: Some(2),
    },
    RadixPreset {
        name: "Octal",
        shorthand: "octal",
        radix: Some(8),
    },
    RadixPreset {
        name: "Decimal",
        shorthand: "decimal",
        radix: Some(10),
    },
    RadixPreset {
        name: "Hexadecimal",
        shorthand: "hexadecimal",
        radix: Some(16),
    },
    RadixPreset {
        name: "Other",
        shorthand: "other",
        radix: None,
    },
];

/// Presets selectable under the given mode.
///
/// Signed mode narrows the table to radices 2 and 10, which also drops the
/// free-form "Other" entry.
pub fn filtered_radix_presets(signed_mode: bool) -> Vec<RadixPreset> {
    if signed_mode {
        RADIX_PRESETS
            .iter()
            .copied()
            .filter(|preset| matches!(preset.radix, Some(2) | Some(10)))
            .collect()
    } else {
        RADIX_PRESETS.to_vec()
    }
}

/// Radices selectable under signed mode, in preset order.
pub fn signed_radices() -> Vec<i64> {
    filtered_radix_presets(true)
        .iter()
        .filter_map(|preset| preset.radix)
        .collect()
}
