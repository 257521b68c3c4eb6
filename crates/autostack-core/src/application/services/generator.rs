//! Project Generator - the main application orchestrator.
//!
//! Runs the fixed generation sequence:
//! 1. Create the root directory (fatal on failure)
//! 2. Render common files
//! 3. Render backend files
//! 4. Scaffold the frontend (external tool)
//! 5. Render Docker files
//! 6. Render CI files
//! 7. Render test files
//!
//! Every step ends in a typed [`StepOutcome`]. Nothing is rolled back: a
//! failed step leaves whatever earlier steps wrote, and the report's manifest
//! says exactly what that is.

use std::fmt::Display;
use std::path::Path;

use tracing::{debug, info, info_span, instrument, warn};

use crate::{
    application::ports::{Filesystem, FrontendScaffolder, TemplateRenderer},
    domain::{
        Backend, Diagnostic, Frontend, GenerationReport, GenerationRequest, ManifestEntry,
        Severity, Step, StepOutcome, StepReport, TemplateContext, TemplateName, WriteAction,
    },
    error::AutostackResult,
};

pub const BACKEND_DIR: &str = "backend";
pub const CLIENT_DIR: &str = "client";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Appended to the backend dependency list when tests are enabled.
///
/// Not deduplicated: every run with tests enabled appends it again.
pub const TEST_DEPENDENCY_LINE: &str = "pytest\n";

/// Main generation service.
pub struct ProjectGenerator {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    scaffolder: Box<dyn FrontendScaffolder>,
}

impl ProjectGenerator {
    /// Create a new generator with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        scaffolder: Box<dyn FrontendScaffolder>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            scaffolder,
        }
    }

    /// Generate the project tree described by `request`.
    ///
    /// Never fails: per-step failures are recorded in the returned report.
    /// Only a failure to create the root directory stops the sequence early.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            backend = %request.backend,
            frontend = %request.frontend,
        )
    )]
    pub fn generate(&self, request: &GenerationRequest) -> GenerationReport {
        let mut report = GenerationReport::new(request);
        let root = request.root();
        info!(run_id = %report.run_id, root = %root.display(), "Generating project");

        if !self.run_step(&mut report, Step::Root, |log| self.create_root(&root, log)) {
            report.aborted = true;
            warn!(root = %root.display(), "Root directory unavailable, aborting");
            return report;
        }

        self.run_step(&mut report, Step::CommonFiles, |log| {
            self.render_common(request, &root, log)
        });
        self.run_step(&mut report, Step::Backend, |log| {
            self.render_backend(request, &root, log)
        });

        let client_ready = request.frontend.is_requested()
            && self.run_step(&mut report, Step::Frontend, |log| {
                self.render_frontend(request, &root, log)
            });

        if request.with_docker {
            self.run_step(&mut report, Step::Docker, |log| {
                self.render_docker(request, &root, client_ready, log)
            });
        }

        if request.with_ci {
            self.run_step(&mut report, Step::Ci, |log| self.render_ci(request, &root, log));
        }

        if request.with_tests {
            self.run_step(&mut report, Step::Tests, |log| {
                self.render_tests(request, &root, log)
            });
        }

        if report.is_success() {
            info!("Generation completed successfully");
        } else {
            warn!(
                failed = report.failed_steps().count(),
                "Generation finished with failed steps"
            );
        }
        report
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn create_root(&self, root: &Path, log: &mut StepLog) -> AutostackResult<StepOutcome> {
        self.ensure_dir(root, log)?;
        log.success(format!("Created project directory: {}", root.display()));
        Ok(StepOutcome::Completed)
    }

    fn render_common(
        &self,
        request: &GenerationRequest,
        root: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        self.render_to(
            TemplateName::Gitignore,
            &TemplateContext::new(),
            &root.join(".gitignore"),
            log,
        )?;

        let ctx = TemplateContext::new().with("project_name", &request.project_name);
        self.render_to(TemplateName::Readme, &ctx, &root.join("README.md"), log)?;

        log.success("Created project files");
        Ok(StepOutcome::Completed)
    }

    fn render_backend(
        &self,
        request: &GenerationRequest,
        root: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        let backend_dir = root.join(BACKEND_DIR);
        self.ensure_dir(&backend_dir, log)?;

        match request.backend {
            Backend::FastApi => {
                let ctx = TemplateContext::new();
                self.render_to(
                    TemplateName::FastapiMain,
                    &ctx,
                    &backend_dir.join("main.py"),
                    log,
                )?;
                // Not re-rendered when present: running with --with-tests twice
                // must leave TEST_DEPENDENCY_LINE in the file twice.
                let requirements = backend_dir.join(REQUIREMENTS_FILE);
                if self.filesystem.exists(&requirements) {
                    log.info(format!("Kept existing {BACKEND_DIR}/{REQUIREMENTS_FILE}"));
                } else {
                    self.render_to(TemplateName::FastapiRequirements, &ctx, &requirements, log)?;
                }
                log.success(format!("Created backend files for: {}", request.backend));
                Ok(StepOutcome::Completed)
            }
            other => Ok(unsupported(log, "backend", other)),
        }
    }

    fn render_frontend(
        &self,
        request: &GenerationRequest,
        root: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        let client_dir = root.join(CLIENT_DIR);

        match request.frontend {
            Frontend::React => {
                let output = self.scaffolder.scaffold(Frontend::React, &client_dir)?;
                debug!(command = %output.command, "Frontend tool finished");
                log.record(&client_dir, WriteAction::Scaffolded);
                log.success(format!("Created frontend files for: {}", request.frontend));
                Ok(StepOutcome::Completed)
            }
            Frontend::Vue => Ok(unsupported(log, "frontend", Frontend::Vue)),
            Frontend::None => Ok(StepOutcome::Skipped {
                reason: "no frontend requested".into(),
            }),
        }
    }

    fn render_docker(
        &self,
        request: &GenerationRequest,
        root: &Path,
        client_ready: bool,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        let ctx = TemplateContext::new().with("project_name", &request.project_name);
        self.render_to(
            TemplateName::BackendDockerfile,
            &ctx,
            &root.join("Dockerfile"),
            log,
        )?;

        let compose_ctx = ctx.with("frontend", request.frontend);
        self.render_to(
            TemplateName::DockerCompose,
            &compose_ctx,
            &root.join("docker-compose.yml"),
            log,
        )?;

        if request.frontend.is_requested() {
            if client_ready {
                self.render_to(
                    TemplateName::FrontendDockerfile,
                    &TemplateContext::new(),
                    &root.join(CLIENT_DIR).join("Dockerfile.frontend"),
                    log,
                )?;
            } else {
                log.warning(format!(
                    "{CLIENT_DIR}/ was not generated; skipping {CLIENT_DIR}/Dockerfile.frontend"
                ));
            }
        }

        log.success("Created Docker files");
        Ok(StepOutcome::Completed)
    }

    fn render_ci(
        &self,
        request: &GenerationRequest,
        root: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        let workflows = root.join(".github").join("workflows");
        self.ensure_dir_all(&workflows, log)?;

        let ctx = TemplateContext::new()
            .with("project_name", &request.project_name)
            .with("frontend", request.frontend);
        self.render_to(TemplateName::CiWorkflow, &ctx, &workflows.join("ci.yml"), log)?;

        log.success("Created CI/CD files");
        Ok(StepOutcome::Completed)
    }

    fn render_tests(
        &self,
        request: &GenerationRequest,
        root: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<StepOutcome> {
        let mut produced = false;

        if request.backend == Backend::FastApi {
            let backend_dir = root.join(BACKEND_DIR);
            let tests_dir = backend_dir.join("tests");
            self.ensure_dir(&tests_dir, log)?;
            self.render_to(
                TemplateName::FastapiTest,
                &TemplateContext::new(),
                &tests_dir.join("test_main.py"),
                log,
            )?;
            self.append(
                &backend_dir.join(REQUIREMENTS_FILE),
                TEST_DEPENDENCY_LINE,
                log,
            )?;
            produced = true;
        } else {
            log.warning(format!(
                "backend '{}' has no test templates yet",
                request.backend
            ));
        }

        if request.frontend == Frontend::React {
            log.info("The Vite React starter ships its own test tooling; no frontend test files written");
            produced = true;
        }

        if produced {
            log.success("Created tests");
            Ok(StepOutcome::Completed)
        } else {
            Ok(StepOutcome::Skipped {
                reason: "no test templates for the selected options".into(),
            })
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run one step, converting any error into a `Failed` outcome.
    ///
    /// Returns `true` only when the step completed.
    fn run_step<F>(&self, report: &mut GenerationReport, step: Step, body: F) -> bool
    where
        F: FnOnce(&mut StepLog) -> AutostackResult<StepOutcome>,
    {
        let span = info_span!("step", step = ?step);
        let _guard = span.enter();

        let mut log = StepLog::new(step);
        let outcome = match body(&mut log) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "Step failed");
                log.error(error.to_string());
                StepOutcome::Failed { error }
            }
        };

        let completed = matches!(outcome, StepOutcome::Completed);
        report.push(log.finish(outcome));
        completed
    }

    fn ensure_dir(&self, path: &Path, log: &mut StepLog) -> AutostackResult<()> {
        let existed = self.filesystem.exists(path);
        self.filesystem.create_dir(path)?;
        if !existed {
            log.record(path, WriteAction::CreatedDir);
        }
        Ok(())
    }

    fn ensure_dir_all(&self, path: &Path, log: &mut StepLog) -> AutostackResult<()> {
        let existed = self.filesystem.exists(path);
        self.filesystem.create_dir_all(path)?;
        if !existed {
            log.record(path, WriteAction::CreatedDir);
        }
        Ok(())
    }

    fn render_to(
        &self,
        template: TemplateName,
        ctx: &TemplateContext,
        path: &Path,
        log: &mut StepLog,
    ) -> AutostackResult<()> {
        let content = self.renderer.render(template, ctx)?;
        let action = if self.filesystem.exists(path) {
            WriteAction::Overwrote
        } else {
            WriteAction::Wrote
        };
        self.filesystem.write_file(path, &content)?;
        debug!(template = %template, path = %path.display(), "Rendered");
        log.record(path, action);
        Ok(())
    }

    fn append(&self, path: &Path, content: &str, log: &mut StepLog) -> AutostackResult<()> {
        self.filesystem.append_file(path, content)?;
        log.record(path, WriteAction::Appended);
        Ok(())
    }
}

/// Outcome for an option value that is accepted but has no templates.
fn unsupported(log: &mut StepLog, option: &str, value: impl Display) -> StepOutcome {
    let reason = format!("{option} '{value}' is not supported yet; nothing generated");
    warn!(option, value = %value, "Unsupported option skipped");
    log.warning(reason.clone());
    StepOutcome::Skipped { reason }
}

/// Diagnostics and manifest collected while a single step runs.
struct StepLog {
    step: Step,
    diagnostics: Vec<Diagnostic>,
    manifest: Vec<ManifestEntry>,
}

impl StepLog {
    fn new(step: Step) -> Self {
        Self {
            step,
            diagnostics: Vec::new(),
            manifest: Vec::new(),
        }
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.into(),
        });
    }

    fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    fn record(&mut self, path: &Path, action: WriteAction) {
        self.manifest.push(ManifestEntry {
            path: path.to_path_buf(),
            action,
        });
    }

    fn finish(self, outcome: StepOutcome) -> StepReport {
        StepReport {
            step: self.step,
            outcome,
            diagnostics: self.diagnostics,
            manifest: self.manifest,
        }
    }
}
