//! Application layer for Autostack.
//!
//! This layer contains:
//! - **Services**: The project generator that runs the fixed step sequence
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Failures raised while steps touch the outside world

pub mod error;
pub mod ports;
pub mod services;

pub use services::ProjectGenerator;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, FrontendScaffolder, ScaffoldOutput, TemplateRenderer};

pub use error::GenerationError;
