// ============================================================================
// domain/error.rs - REQUEST VALIDATION ERRORS
// ============================================================================

use serde::Serialize;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports own their errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown {option} '{value}'")]
    UnknownOption { option: &'static str, value: String },

    // ========================================================================
    // Unsupported Combinations
    // ========================================================================
    #[error("{option} '{value}' is accepted but has no generator yet")]
    UnsupportedOption { option: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name must be a single directory name, not a path".into(),
                "Use --output to choose where the project is created".into(),
                "Examples: my-project, my_app, shop".into(),
            ],
            Self::UnknownOption { option, .. } => vec![
                format!("Supported {option} values:"),
                match *option {
                    "backend" => "  • fastapi, flask, express".into(),
                    "frontend" => "  • react, vue, none".into(),
                    _ => "  • See --help for accepted values".into(),
                },
            ],
            Self::UnsupportedOption { option, value } => vec![
                format!("The {} '{}' does not generate any files yet", option, value),
                match *option {
                    "backend" => "Use --backend fastapi for a working backend".into(),
                    _ => "Use --frontend react for a working frontend".into(),
                },
                "Drop --strict to accept the option and skip its files".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownOption { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedOption { .. } => ErrorCategory::Unsupported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
}
