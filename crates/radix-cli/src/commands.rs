//! Subcommand implementations.
//!
//! The convert command drives the engine exactly like an interactive
//! front-end would: it dispatches one action per field through the
//! reducer, so every cross-field invariant (signed radix pairing, sign
//! mode resets) applies to CLI input too.

use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::debug;

use radix_core::{convert, reduce};
use radix_model::{Action, ConversionState, allowed_digits, filtered_radix_presets};
use radix_validate::{ValidationReport, validate_radix, validate_state};

use crate::cli::{ConvertArgs, DigitsArgs, PresetsArgs};
use crate::summary::{apply_table_style, header_cell};

/// Result of a convert run, for rendering and exit-code decisions.
pub struct ConvertOutcome {
    pub report: ValidationReport,
    pub output_value: Option<String>,
}

impl ConvertOutcome {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let mut state = ConversionState::default();

    state = reduce(
        &state,
        Action::SetSignedMode {
            signed_mode: args.signed,
        },
    );
    state = reduce(
        &state,
        Action::SetInputRadix {
            input_radix: Some(args.input_radix),
        },
    );
    state = reduce(
        &state,
        Action::SetOutputRadix {
            output_radix: Some(args.output_radix),
        },
    );
    if let Some(mode) = args.input_sign_mode {
        state = reduce(
            &state,
            Action::SetInputSignMode {
                input_sign_mode: Some(mode.into()),
            },
        );
    }
    if let Some(mode) = args.output_sign_mode {
        state = reduce(
            &state,
            Action::SetOutputSignMode {
                output_sign_mode: Some(mode.into()),
            },
        );
    }
    state = reduce(
        &state,
        Action::SetValue {
            value: args.value.clone(),
        },
    );

    let report = validate_state(&state);
    if !report.is_valid() {
        debug!(issues = report.error_count(), "state failed validation");
        return Ok(ConvertOutcome {
            report,
            output_value: None,
        });
    }

    let output_value = convert(&state)?;
    Ok(ConvertOutcome {
        report,
        output_value: Some(output_value),
    })
}

pub fn run_digits(args: &DigitsArgs) -> Result<()> {
    if let Some(error) = validate_radix(Some(args.radix), false) {
        bail!(error);
    }

    let digits: String = allowed_digits(Some(args.radix)).into_iter().collect();
    println!("{digits}");
    Ok(())
}

pub fn run_presets(args: &PresetsArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Shorthand"),
        header_cell("Radix"),
    ]);
    apply_table_style(&mut table);

    for preset in filtered_radix_presets(args.signed) {
        table.add_row(vec![
            preset.name.to_string(),
            preset.shorthand.to_string(),
            preset
                .radix
                .map_or_else(|| "-".to_string(), |radix| radix.to_string()),
        ]);
    }

    println!("{table}");
    Ok(())
}
