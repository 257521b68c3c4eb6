//! Implementation of the `autostack init` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, wire
//! the adapters, run the generator, and present the report. No generation
//! logic lives here.

use std::io::IsTerminal as _;
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{debug, info, instrument};

use autostack_adapters::{
    DryRunScaffolder, LocalFilesystem, MemoryFilesystem, MiniJinjaRenderer, ViteScaffolder,
};
use autostack_core::{
    application::{
        ProjectGenerator,
        ports::{Filesystem, FrontendScaffolder, ScaffoldOutput},
    },
    domain::{
        Backend, Frontend, GenerationReport, GenerationRequest, ProjectName, Step, StepOutcome,
    },
    error::AutostackResult,
};

use crate::{
    cli::{GlobalArgs, InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `autostack init` command.
///
/// Dispatch sequence:
/// 1. Build and validate the request (flags over config defaults)
/// 2. Reject unimplemented options under `--strict`
/// 3. Wire adapters (real or dry-run)
/// 4. Generate and present the report
/// 5. Map the report onto the exit status
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    debug!(?request, "Request resolved");

    if args.strict {
        request.ensure_supported().map_err(|e| CliError::Core(e.into()))?;
    }

    let tool = ViteScaffolder::with_command(
        config.frontend.program.clone(),
        config.frontend.args.iter().cloned(),
    );
    let generator = if args.dry_run {
        dry_run_generator(&request, tool)?
    } else {
        let spinner = !output.is_quiet()
            && output.format() != OutputFormat::Json
            && std::io::stderr().is_terminal();
        ProjectGenerator::new(
            Box::new(LocalFilesystem::new()),
            Box::new(MiniJinjaRenderer::new()),
            Box::new(SpinnerScaffolder {
                inner: tool,
                spinner,
            }),
        )
    };

    let human = output.format() != OutputFormat::Json;
    if human {
        let verb = if args.dry_run { "Planning" } else { "Creating" };
        output.header(&format!("{verb} '{}'...", request.project_name))?;
    }

    let report = generator.generate(&request);
    info!(run_id = %report.run_id, success = report.is_success(), "Generation finished");

    output.report(&report, args.dry_run || global.verbose > 0)?;

    let result = report_status(&report);
    if human && result.is_ok() {
        summarize(&request, &report, args.dry_run, &output)?;
    }
    result
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &InitArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let name = ProjectName::parse(args.name.clone()).map_err(|e| CliError::Core(e.into()))?;

    let backend = match args.backend {
        Some(b) => b.into(),
        None => config_default::<Backend>("defaults.backend", &config.defaults.backend)?,
    };
    let frontend = match args.frontend {
        Some(f) => f.into(),
        None => config_default::<Frontend>("defaults.frontend", &config.defaults.frontend)?,
    };

    Ok(GenerationRequest::new(name)
        .backend(backend)
        .frontend(frontend)
        .with_docker(args.with_docker)
        .with_tests(args.with_tests)
        .with_ci(args.with_ci)
        .location(&args.output))
}

fn config_default<T>(key: &str, raw: &str) -> CliResult<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse().map_err(|e: T::Err| CliError::ConfigError {
        message: format!("{key}: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// Generator over an in-memory tree. The parent directory is mirrored only
/// when it really exists, so a bad `--output` fails the same way it would
/// for a real run. An existing project is copied in whole, so the preview
/// shows overwrites and appends like a second real run.
fn dry_run_generator(
    request: &GenerationRequest,
    tool: ViteScaffolder,
) -> CliResult<ProjectGenerator> {
    let memory = MemoryFilesystem::new();
    let root = request.root();
    if root.is_dir() {
        debug!(root = %root.display(), "Mirroring existing project");
        memory.mirror_dir(&root)?;
    } else if request.location.is_dir() {
        memory.create_dir_all(&request.location)?;
    }
    let scaffolder = DryRunScaffolder::new(memory.clone(), tool);

    Ok(ProjectGenerator::new(
        Box::new(memory),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(scaffolder),
    ))
}

/// Shows a spinner on stderr while the external tool runs.
struct SpinnerScaffolder {
    inner: ViteScaffolder,
    spinner: bool,
}

impl FrontendScaffolder for SpinnerScaffolder {
    fn scaffold(&self, framework: Frontend, target: &Path) -> AutostackResult<ScaffoldOutput> {
        let bar = if self.spinner {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(format!("Scaffolding {framework} frontend with create-vite..."));
        bar.enable_steady_tick(Duration::from_millis(100));

        let result = self.inner.scaffold(framework, target);
        bar.finish_and_clear();
        result
    }
}

// ── Presentation ──────────────────────────────────────────────────────────────

fn report_status(report: &GenerationReport) -> CliResult<()> {
    if report.aborted {
        let reason = report
            .step(Step::Root)
            .and_then(|s| match &s.outcome {
                StepOutcome::Failed { error } => Some(error.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| "unknown error".into());
        return Err(CliError::GenerationAborted {
            root: report.root.clone(),
            reason,
        });
    }

    let failed: Vec<String> = report
        .failed_steps()
        .map(|s| s.step.title().to_string())
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::GenerationIncomplete { failed })
    }
}

fn summarize(
    request: &GenerationRequest,
    report: &GenerationReport,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("")?;
    if dry_run {
        output.info("Dry run: nothing was written and no external tool was run.")?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created at {} ({})",
        request.project_name,
        report.root.display(),
        report
            .started_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S"),
    ))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    if request.backend == Backend::FastApi {
        output.print("  pip install -r backend/requirements.txt")?;
        output.print("  (cd backend && uvicorn main:app --reload)")?;
    }
    if matches!(
        report.step(Step::Frontend).map(|s| &s.outcome),
        Some(StepOutcome::Completed)
    ) {
        output.print("  (cd client && npm install && npm run dev)")?;
    }
    Ok(())
}
