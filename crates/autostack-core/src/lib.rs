//! Autostack Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Autostack
//! full-stack project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          autostack-cli (CLI)            │
//! │   (Parses flags, presents the report)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProjectGenerator)            │
//! │     Runs the fixed generation steps     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, FrontendScaffold)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   autostack-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MiniJinja, Vite, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (GenerationRequest, GenerationReport)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use autostack_core::{
//!     application::ProjectGenerator,
//!     domain::{Frontend, GenerationRequest, ProjectName},
//! };
//!
//! // 1. Build the request
//! let request = GenerationRequest::new(ProjectName::parse("shop").unwrap())
//!     .frontend(Frontend::React)
//!     .with_docker(true);
//!
//! // 2. Run the generator (with injected adapters)
//! let generator = ProjectGenerator::new(filesystem, renderer, scaffolder);
//! let report = generator.generate(&request);
//! assert!(report.is_success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectGenerator,
        ports::{Filesystem, FrontendScaffolder, ScaffoldOutput, TemplateRenderer},
    };
    pub use crate::domain::{
        Backend, Diagnostic, Frontend, GenerationReport, GenerationRequest, ManifestEntry,
        ProjectName, Severity, Step, StepOutcome, StepReport, TemplateContext, TemplateName,
        WriteAction,
    };
    pub use crate::error::{AutostackError, AutostackResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
