//! Output management and formatting.
//!
//! Everything the user sees on stdout goes through [`OutputManager`]; the
//! generation report is rendered here and nowhere else.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;

use autostack_core::domain::{Diagnostic, GenerationReport, Severity, WriteAction};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            <OutputFormat as ValueEnum>::from_str(&config.output.format, true)
                .unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Report rendering ──────────────────────────────────────────────────

    /// Print one diagnostic with the indicator matching its severity.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) -> io::Result<()> {
        match diagnostic.severity {
            Severity::Success => self.success(&diagnostic.message),
            Severity::Info => self.info(&diagnostic.message),
            Severity::Warning => self.warning(&diagnostic.message),
            Severity::Error => self.error(&diagnostic.message),
        }
    }

    /// Render a finished report in the resolved format.
    ///
    /// `list_manifest` prints every path the run touched (dry runs, `-v`).
    pub fn report(&self, report: &GenerationReport, list_manifest: bool) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }

        for (_, diagnostic) in report.diagnostics() {
            self.diagnostic(diagnostic)?;
        }

        if list_manifest {
            self.print("")?;
            self.header("Files:")?;
            for entry in report.manifest() {
                self.print(&format!(
                    "  {:<10} {}",
                    action_label(entry.action),
                    entry.path.display()
                ))?;
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn action_label(action: WriteAction) -> &'static str {
    match action {
        WriteAction::CreatedDir => "mkdir",
        WriteAction::Wrote => "write",
        WriteAction::Overwrote => "overwrite",
        WriteAction::Appended => "append",
        WriteAction::Scaffolded => "scaffold",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
