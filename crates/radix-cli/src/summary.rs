//! Rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::commands::ConvertOutcome;

/// Print the outcome of a convert run.
///
/// Valid input prints the converted value alone so the output can be
/// piped. Invalid input prints one row per field issue. The JSON form
/// carries all three collaborator outputs:
/// `{"isValid": ..., "outputValue": ..., "validationMessages": [...]}`.
pub fn print_convert_outcome(outcome: &ConvertOutcome, json: bool) {
    if json {
        let document = serde_json::json!({
            "isValid": outcome.is_valid(),
            "outputValue": outcome.output_value,
            "validationMessages": outcome.report.messages(),
        });
        println!("{document:#}");
        return;
    }

    if let Some(output_value) = &outcome.output_value {
        println!("{output_value}");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for issue in &outcome.report.issues {
        table.add_row(vec![issue.field.to_string(), issue.message()]);
    }
    eprintln!("{table}");
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
