//! Application layer errors.
//!
//! These errors represent failures while writing the project tree, not
//! request validation. Validation errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while a generation step runs.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationError {
    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// A file could not be written or appended to.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// A template is missing, corrupt, or lacks a substitution value.
    #[error("Template '{template}' failed to render: {reason}")]
    TemplateRender { template: String, reason: String },

    /// The external frontend scaffolding tool failed.
    ///
    /// `status` is `None` when the process could not be launched at all.
    #[error("External command `{command}` failed{}: {stderr}", exit_suffix(.status))]
    ExternalTool {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn exit_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

impl GenerationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateRender { template, .. } => vec![
                format!("Built-in template '{}' could not be rendered", template),
                "This is likely a bug, please report it".into(),
            ],
            Self::ExternalTool { status: None, .. } => vec![
                "The frontend scaffolding tool could not be started".into(),
                "Ensure Node.js (npx) is installed and in your PATH".into(),
                "Or point AUTOSTACK_FRONTEND__PROGRAM at the right executable".into(),
            ],
            Self::ExternalTool { .. } => vec![
                "The frontend scaffolding tool reported an error (see above)".into(),
                "Check your network connection and npm registry access".into(),
                "Re-run without --frontend to skip the client app".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreation { .. } | Self::FileWrite { .. } => ErrorCategory::Filesystem,
            Self::TemplateRender { .. } => ErrorCategory::Internal,
            Self::ExternalTool { .. } => ErrorCategory::ExternalTool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_tool_message_includes_exit_code_and_stderr() {
        let err = GenerationError::ExternalTool {
            command: "npx create-vite".into(),
            status: Some(1),
            stderr: "registry unreachable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("registry unreachable"));
    }

    #[test]
    fn launch_failure_has_no_exit_code() {
        let err = GenerationError::ExternalTool {
            command: "npx".into(),
            status: None,
            stderr: "No such file or directory".into(),
        };
        assert!(!err.to_string().contains("exit code"));
        assert!(err.suggestions().iter().any(|s| s.contains("npx")));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let err = GenerationError::DirectoryCreation {
            path: PathBuf::from("demo/backend"),
            reason: "denied".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "directory_creation");
        assert_eq!(json["path"], "demo/backend");
    }
}
