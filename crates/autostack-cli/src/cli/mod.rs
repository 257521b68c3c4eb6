//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use autostack_core::domain::{Backend as CoreBackend, Frontend as CoreFrontend};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "autostack",
    bin_name = "autostack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Full-stack project skeletons in one command",
    long_about = "Autostack generates a project skeleton with a backend, an optional \
                  frontend, and optional Docker, CI, and test files.",
    after_help = "EXAMPLES:\n\
        \x20 autostack init shop\n\
        \x20 autostack init shop --frontend react --with-docker --with-ci\n\
        \x20 autostack init shop --with-tests --output ~/code --dry-run",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project skeleton.
    #[command(
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 autostack init shop\n\
            \x20 autostack init shop --backend fastapi --frontend react\n\
            \x20 autostack init shop --with-docker --with-tests --with-ci"
    )]
    Init(InitArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `autostack init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; becomes the root directory name.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: String,

    /// Backend framework. Falls back to `defaults.backend` from config.
    #[arg(
        short = 'b',
        long = "backend",
        value_name = "BACKEND",
        value_enum,
        help = "Backend framework [default: fastapi]"
    )]
    pub backend: Option<Backend>,

    /// Frontend framework. Falls back to `defaults.frontend` from config.
    #[arg(
        short = 'f',
        long = "frontend",
        value_name = "FRONTEND",
        value_enum,
        help = "Frontend framework [default: none]"
    )]
    pub frontend: Option<Frontend>,

    #[arg(long = "with-docker", help = "Add Dockerfile and docker-compose.yml")]
    pub with_docker: bool,

    #[arg(long = "with-tests", help = "Add test stubs and the test dependency")]
    pub with_tests: bool,

    #[arg(long = "with-ci", help = "Add a GitHub Actions workflow")]
    pub with_ci: bool,

    /// Parent directory for the project root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Plan against an in-memory filesystem; nothing is written and no
    /// external tool runs.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Reject options that have no templates yet instead of skipping them.
    #[arg(long = "strict", help = "Fail on options that are not implemented yet")]
    pub strict: bool,
}

// ── Value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    #[value(name = "fastapi")]
    FastApi,
    Flask,
    Express,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    React,
    Vue,
    None,
}

impl From<Backend> for CoreBackend {
    fn from(value: Backend) -> Self {
        match value {
            Backend::FastApi => CoreBackend::FastApi,
            Backend::Flask => CoreBackend::Flask,
            Backend::Express => CoreBackend::Express,
        }
    }
}

impl From<Frontend> for CoreFrontend {
    fn from(value: Frontend) -> Self {
        match value {
            Frontend::React => CoreFrontend::React,
            Frontend::Vue => CoreFrontend::Vue,
            Frontend::None => CoreFrontend::None,
        }
    }
}
