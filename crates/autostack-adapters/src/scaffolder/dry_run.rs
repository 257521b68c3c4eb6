//! Scaffolder used for dry runs: records what would run, runs nothing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::info;

use autostack_core::{
    application::ports::{Filesystem, FrontendScaffolder, ScaffoldOutput},
    domain::Frontend,
    error::AutostackResult,
};

use super::ViteScaffolder;
use crate::filesystem::MemoryFilesystem;

/// Pretends to scaffold a frontend.
///
/// The target directory is created in the shared [`MemoryFilesystem`] so
/// later steps (the frontend Dockerfile) see the same tree a real run would.
#[derive(Debug, Clone)]
pub struct DryRunScaffolder {
    filesystem: MemoryFilesystem,
    describe: ViteScaffolder,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl DryRunScaffolder {
    pub fn new(filesystem: MemoryFilesystem, describe: ViteScaffolder) -> Self {
        Self {
            filesystem,
            describe,
            invocations: Arc::default(),
        }
    }

    /// Command lines that would have run, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl FrontendScaffolder for DryRunScaffolder {
    fn scaffold(&self, framework: Frontend, target: &Path) -> AutostackResult<ScaffoldOutput> {
        let command = self.describe.command_line(framework, target);
        info!(%command, "Dry run: skipping frontend scaffolding tool");

        self.filesystem.create_dir_all(target)?;
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(command.clone());
        }
        Ok(ScaffoldOutput { command })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_creates_target() {
        let fs = MemoryFilesystem::new();
        let scaffolder = DryRunScaffolder::new(fs.clone(), ViteScaffolder::new());

        let out = scaffolder
            .scaffold(Frontend::React, Path::new("shop/client"))
            .unwrap();

        assert!(out.command.ends_with("shop/client --template react"));
        assert!(fs.exists(Path::new("shop/client")));
        assert_eq!(scaffolder.invocations(), vec![out.command]);
    }
}
