//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `AUTOSTACK_<SECTION>__<KEY>`, e.g.
//!    `AUTOSTACK_FRONTEND__PROGRAM=pnpm`
//! 3. Config file: `--config FILE` (must exist) or the platform config
//!    directory (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use autostack_core::domain::{Backend, Frontend};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// The external frontend scaffolding tool.
    pub frontend: FrontendToolConfig,
}

/// Option values used when the matching flag is absent.
///
/// Kept as strings so a bad value is reported as a configuration problem
/// with the offending text, not as a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub backend: String,
    pub frontend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendToolConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                backend: Backend::default().to_string(),
                frontend: Frontend::default().to_string(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            frontend: FrontendToolConfig {
                program: "npx".into(),
                args: vec!["--yes".into(), "create-vite@latest".into()],
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must exist.
    /// Without it the platform default location is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix("AUTOSTACK")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("frontend.args")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.autostack.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "autostack", "autostack")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".autostack.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.backend, "fastapi");
        assert_eq!(cfg.defaults.frontend, "none");
        assert_eq!(cfg.frontend.program, "npx");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("autostack.toml");
        std::fs::write(
            &path,
            "[defaults]\nfrontend = \"react\"\n\n[frontend]\nprogram = \"pnpm\"\nargs = [\"create\", \"vite\"]\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.defaults.frontend, "react");
        assert_eq!(cfg.defaults.backend, "fastapi");
        assert_eq!(cfg.frontend.program, "pnpm");
        assert_eq!(cfg.frontend.args, vec!["create", "vite"]);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
