//! Frontend scaffolding through create-vite.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, instrument, warn};

use autostack_core::{
    application::{
        GenerationError,
        ports::{FrontendScaffolder, ScaffoldOutput},
    },
    domain::Frontend,
    error::AutostackResult,
};

const DEFAULT_PROGRAM: &str = "npx";
const DEFAULT_ARGS: [&str; 2] = ["--yes", "create-vite@latest"];

/// Runs `npx --yes create-vite@latest <target> --template <framework>`.
///
/// The program and its leading arguments can be replaced, which is how the
/// CLI lets users point at a local install and how tests substitute a stub.
#[derive(Debug, Clone)]
pub struct ViteScaffolder {
    program: String,
    args: Vec<String>,
}

impl ViteScaffolder {
    pub fn new() -> Self {
        Self::with_command(DEFAULT_PROGRAM, DEFAULT_ARGS)
    }

    /// Use a different program and leading arguments. The target path and
    /// `--template <framework>` are always appended.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The command line that would run for `framework` at `target`.
    pub fn command_line(&self, framework: Frontend, target: &Path) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 4);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.push(target.display().to_string());
        parts.push("--template".to_string());
        parts.push(framework.as_str().to_string());
        parts.join(" ")
    }
}

impl Default for ViteScaffolder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontendScaffolder for ViteScaffolder {
    #[instrument(skip(self), fields(program = %self.program))]
    fn scaffold(&self, framework: Frontend, target: &Path) -> AutostackResult<ScaffoldOutput> {
        let command = self.command_line(framework, target);
        info!(%command, "Running frontend scaffolding tool");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .args(["--template", framework.as_str()])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GenerationError::ExternalTool {
                command: command.clone(),
                status: None,
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = ?output.status.code(), "Frontend scaffolding tool failed");
            return Err(GenerationError::ExternalTool {
                command,
                status: output.status.code(),
                stderr,
            }
            .into());
        }

        debug!(
            stdout = %String::from_utf8_lossy(&output.stdout).trim(),
            "Frontend scaffolding tool finished"
        );
        Ok(ScaffoldOutput { command })
    }
}
