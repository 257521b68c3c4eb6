//! Error handling for the Autostack CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use autostack_core::error::AutostackError;

pub use autostack_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file or value could not be read or understood.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `autostack-core` before generation started.
    #[error(transparent)]
    Core(#[from] AutostackError),

    // ── Generation outcome ─────────────────────────────────────────────────
    /// The root directory could not be created; nothing was generated.
    #[error("Could not create project directory {}: {reason}", root.display())]
    GenerationAborted { root: PathBuf, reason: String },

    /// Some steps failed; files from other steps are on disk.
    #[error("Generation incomplete: {} failed", failed.join(", "))]
    GenerationIncomplete { failed: Vec<String> },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check AUTOSTACK_* environment variables".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::GenerationAborted { root, .. } => vec![
                format!(
                    "Ensure the parent of '{}' exists and is writable",
                    root.display()
                ),
                "Choose another location with --output".into(),
            ],

            Self::GenerationIncomplete { .. } => vec![
                "Files from successful steps were kept; see the messages above".into(),
                "Fix the reported problem and run the same command again".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Unsupported => ErrorCategory::UserError,
                CoreCategory::Filesystem | CoreCategory::ExternalTool | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
            Self::GenerationAborted { .. } => ErrorCategory::Internal,
            Self::GenerationIncomplete { .. } => ErrorCategory::Incomplete,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Incomplete    |  5   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Incomplete => 5,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Incomplete => tracing::warn!("Incomplete generation: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, strict rejections).
    UserError,
    /// Configuration error.
    Configuration,
    /// Generation ran but one or more steps failed.
    Incomplete,
    /// Internal/system error, including an aborted generation.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use autostack_core::domain::{DomainError, ProjectName};
    use std::io;

    #[test]
    fn invalid_name_is_a_user_error() {
        let err: CliError = AutostackError::from(ProjectName::parse("a/b").unwrap_err()).into();
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn unsupported_option_is_a_user_error() {
        let err: CliError = AutostackError::from(DomainError::UnsupportedOption {
            option: "frontend",
            value: "vue".into(),
        })
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_incomplete() {
        let err = CliError::GenerationIncomplete {
            failed: vec!["frontend".into(), "docker".into()],
        };
        assert_eq!(err.exit_code(), 5);
        assert_eq!(err.to_string(), "Generation incomplete: frontend, docker failed");
    }

    #[test]
    fn exit_code_aborted_and_io() {
        let aborted = CliError::GenerationAborted {
            root: PathBuf::from("/nope/shop"),
            reason: "No such file or directory".into(),
        };
        assert_eq!(aborted.exit_code(), 1);
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::GenerationAborted {
            root: PathBuf::from("/tmp/x"),
            reason: "denied".into(),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("parse failure"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: parse failure"));
        assert!(!s.contains("--verbose"));
    }
}
