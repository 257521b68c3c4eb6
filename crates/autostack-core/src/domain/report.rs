//! Generation report: what each step did, said, and wrote.
//!
//! The report replaces console printing inside the generator. Presentation
//! (human, plain, JSON) is the CLI's job.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::GenerationRequest;
use crate::error::AutostackError;

/// One discrete unit of the generation sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Root,
    CommonFiles,
    Backend,
    Frontend,
    Docker,
    Ci,
    Tests,
}

impl Step {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Root => "Project directory",
            Self::CommonFiles => "Project files",
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::Docker => "Docker",
            Self::Ci => "CI/CD",
            Self::Tests => "Tests",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Completed,
    /// The step ran but had nothing it could produce.
    Skipped { reason: String },
    Failed { error: AutostackError },
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable event collected while a step ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteAction {
    CreatedDir,
    Wrote,
    Overwrote,
    Appended,
    /// A tree produced by the external frontend tool.
    Scaffolded,
}

/// A path the generator touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub action: WriteAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
    pub diagnostics: Vec<Diagnostic>,
    pub manifest: Vec<ManifestEntry>,
}

/// Result of one `generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub project_name: String,
    pub root: PathBuf,
    pub started_at: DateTime<Utc>,
    /// Set when the root directory could not be created; no later step ran.
    pub aborted: bool,
    pub steps: Vec<StepReport>,
}

impl GenerationReport {
    pub fn new(request: &GenerationRequest) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            project_name: request.project_name.to_string(),
            root: request.root(),
            started_at: Utc::now(),
            aborted: false,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, report: StepReport) {
        self.steps.push(report);
    }

    /// No abort and no failed step. Skipped steps still count as success.
    pub fn is_success(&self) -> bool {
        !self.aborted && !self.steps.iter().any(|s| s.outcome.is_failed())
    }

    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| s.outcome.is_failed())
    }

    /// Every manifest entry, in the order it was written.
    pub fn manifest(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.steps.iter().flat_map(|s| s.manifest.iter())
    }

    pub fn touched(&self, path: &Path) -> bool {
        self.manifest().any(|e| e.path == path)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (Step, &Diagnostic)> {
        self.steps
            .iter()
            .flat_map(|s| s.diagnostics.iter().map(move |d| (s.step, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GenerationError;
    use crate::domain::ProjectName;

    fn report() -> GenerationReport {
        GenerationReport::new(&GenerationRequest::new(ProjectName::parse("demo").unwrap()))
    }

    fn step(step: Step, outcome: StepOutcome) -> StepReport {
        StepReport {
            step,
            outcome,
            diagnostics: vec![],
            manifest: vec![],
        }
    }

    #[test]
    fn skipped_steps_do_not_fail_the_report() {
        let mut r = report();
        r.push(step(Step::Root, StepOutcome::Completed));
        r.push(step(
            Step::Frontend,
            StepOutcome::Skipped {
                reason: "vue".into(),
            },
        ));
        assert!(r.is_success());
    }

    #[test]
    fn failed_step_fails_the_report() {
        let mut r = report();
        r.push(step(
            Step::Frontend,
            StepOutcome::Failed {
                error: GenerationError::ExternalTool {
                    command: "npx".into(),
                    status: Some(1),
                    stderr: "boom".into(),
                }
                .into(),
            },
        ));
        assert!(!r.is_success());
        assert_eq!(r.failed_steps().count(), 1);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let mut r = report();
        r.push(step(
            Step::Backend,
            StepOutcome::Skipped {
                reason: "flask".into(),
            },
        ));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["steps"][0]["step"], "backend");
        assert_eq!(json["steps"][0]["outcome"]["status"], "skipped");
        assert_eq!(json["project_name"], "demo");
    }
}
