//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from external systems.
//! The `autostack-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Frontend, TemplateContext, TemplateName};
use crate::error::AutostackResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `autostack_adapters::filesystem::LocalFilesystem` (production)
/// - `autostack_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
pub trait Filesystem: Send + Sync {
    /// Create a single directory. An existing directory is not an error;
    /// a missing parent is.
    fn create_dir(&self, path: &Path) -> AutostackResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AutostackResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> AutostackResult<()>;

    /// Append content to a file, creating it when missing.
    fn append_file(&self, path: &Path, content: &str) -> AutostackResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `autostack_adapters::renderer::MiniJinjaRenderer` (embedded templates)
pub trait TemplateRenderer: Send + Sync {
    /// Render one template with the given named values.
    fn render(&self, template: TemplateName, context: &TemplateContext) -> AutostackResult<String>;
}

/// What the frontend scaffolding tool did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutput {
    /// The command line that ran, for diagnostics.
    pub command: String,
}

/// Port for the external frontend scaffolding tool.
///
/// Implemented by:
/// - `autostack_adapters::scaffolder::ViteScaffolder` (`npx create-vite`)
/// - `autostack_adapters::scaffolder::DryRunScaffolder` (records, never runs)
#[cfg_attr(test, mockall::automock)]
pub trait FrontendScaffolder: Send + Sync {
    /// Create a frontend app of the given framework at `target`.
    ///
    /// Blocks until the tool exits. A non-zero exit is an
    /// `ExternalTool` error carrying the tool's stderr.
    fn scaffold(&self, framework: Frontend, target: &Path) -> AutostackResult<ScaffoldOutput>;
}
