//! Core domain layer for Autostack.
//!
//! Pure data and validation: the generation request, the template names and
//! their context, and the report produced by a run. No filesystem, process,
//! or template engine access happens here.

pub mod error;
pub mod report;
pub mod request;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use report::{
    Diagnostic, GenerationReport, ManifestEntry, Severity, Step, StepOutcome, StepReport,
    WriteAction,
};
pub use request::{Backend, Frontend, GenerationRequest, ProjectName};
pub use template::{TemplateContext, TemplateName};
