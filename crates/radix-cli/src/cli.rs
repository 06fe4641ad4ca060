//! CLI argument definitions for the radix converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use radix_model::SignMode;

#[derive(Parser)]
#[command(
    name = "radix",
    version,
    about = "Radix converter - convert values between numeral systems",
    long_about = "Convert numeric values between positional numeral systems \
                  (radices 1-36).\n\n\
                  Signed conversion supports sign-and-magnitude, one's \
                  complement, and two's complement binary alongside \
                  hyphen-signed decimal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a value between two radices.
    Convert(ConvertArgs),

    /// Show the digits allowed in a radix.
    Digits(DigitsArgs),

    /// List the radix presets.
    Presets(PresetsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// The digit string to convert.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source radix (1-36).
    #[arg(short = 'i', long = "input-radix", value_name = "RADIX")]
    pub input_radix: i64,

    /// Target radix (1-36).
    #[arg(short = 'o', long = "output-radix", value_name = "RADIX")]
    pub output_radix: i64,

    /// Interpret and emit signed values (radices 2 and 10 only).
    #[arg(long = "signed")]
    pub signed: bool,

    /// Sign convention for reading binary input (signed mode).
    #[arg(long = "input-sign-mode", value_enum, value_name = "MODE")]
    pub input_sign_mode: Option<SignModeArg>,

    /// Sign convention for writing binary output (signed mode).
    #[arg(long = "output-sign-mode", value_enum, value_name = "MODE")]
    pub output_sign_mode: Option<SignModeArg>,

    /// Emit a JSON document instead of human-readable output.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DigitsArgs {
    /// The radix to list digits for (1-36).
    #[arg(value_name = "RADIX")]
    pub radix: i64,
}

#[derive(Parser)]
pub struct PresetsArgs {
    /// Only presets selectable in signed mode.
    #[arg(long = "signed")]
    pub signed: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SignModeArg {
    SignAndMagnitude,
    OnesComplement,
    TwosComplement,
}

impl From<SignModeArg> for SignMode {
    fn from(arg: SignModeArg) -> Self {
        match arg {
            SignModeArg::SignAndMagnitude => SignMode::SignAndMagnitude,
            SignModeArg::OnesComplement => SignMode::OnesComplement,
            SignModeArg::TwosComplement => SignMode::TwosComplement,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Compact,
    Json,
}
