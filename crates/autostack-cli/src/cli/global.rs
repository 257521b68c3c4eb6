//! Flags shared by every `autostack` invocation.
//!
//! Flattened into [`super::Cli`]; each one is `global = true`, so
//! `autostack init shop -q` and `autostack -q init shop` mean the same.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};

/// Logging, colour, config and report format.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` shows step progress, `-vv` adapter detail, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity. Also lists every written path \
                     after the step summary.
    (none)  - Only warnings and errors
    -v      - Step progress
    -vv     - Template and tool detail
    -vvv    - Everything"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal; the exit code still reports the outcome.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`,
    /// `no`, `off`) turns colour off, as <https://no-color.org> asks.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file layered between the built-in defaults and `AUTOSTACK_*`
    /// variables. Must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How `init` presents its generation report.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Report format for init"
    )]
    pub output_format: OutputFormat,
}

/// Presentation of the `init` report. `auto` defers to `output.format` in
/// the config, then to whether stdout is a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Step summaries with colour.
    Human,
    /// Step summaries, no ANSI codes.
    Plain,
    /// The whole report, manifest included, as one JSON document on stdout.
    Json,
}
