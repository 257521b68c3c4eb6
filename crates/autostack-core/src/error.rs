//! Unified error handling for Autostack Core.
//!
//! This module provides a unified error type that wraps domain and generation
//! errors, with user-actionable suggestions.

use serde::Serialize;
use thiserror::Error;

use crate::application::GenerationError;
use crate::domain::DomainError;

/// Root error type for Autostack Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AutostackError {
    /// Errors from the domain layer (request validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors raised while a generation step touches the outside world.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl AutostackError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Unsupported => ErrorCategory::Unsupported,
            },
            Self::Generation(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
    Filesystem,
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type AutostackResult<T> = Result<T, AutostackError>;
