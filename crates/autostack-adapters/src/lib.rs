//! Infrastructure adapters for Autostack.
//!
//! This crate implements the ports defined in `autostack-core::application::ports`.
//! It contains all external dependencies and I/O operations: the filesystem,
//! the minijinja template engine, and the external frontend scaffolding tool.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod scaffolder;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use scaffolder::{DryRunScaffolder, ViteScaffolder};
