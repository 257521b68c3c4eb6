//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `autostack-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `TemplateRenderer`: Template rendering
//!   - `FrontendScaffolder`: External frontend tool invocation

pub mod output;

pub use output::{Filesystem, FrontendScaffolder, ScaffoldOutput, TemplateRenderer};

#[cfg(test)]
pub use output::MockFrontendScaffolder;
