//! The generation request: what the user asked for.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A project name usable as a single directory name.
///
/// Invariant: non-empty, exactly one normal path component. No other
/// sanitization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw project name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: raw.clone(),
            reason: reason.into(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }

        let mut components = Path::new(&raw).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(raw)),
            _ => Err(invalid("name must be a plain directory name")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Backend framework choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    FastApi,
    Flask,
    Express,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Self::FastApi, Self::Flask, Self::Express];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastApi => "fastapi",
            Self::Flask => "flask",
            Self::Express => "express",
        }
    }

    /// Whether the generator has real templates for this backend.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::FastApi)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == lower)
            .ok_or_else(|| DomainError::UnknownOption {
                option: "backend",
                value: s.into(),
            })
    }
}

/// Frontend framework choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    React,
    Vue,
    #[default]
    None,
}

impl Frontend {
    pub const ALL: [Frontend; 3] = [Self::React, Self::Vue, Self::None];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::None => "none",
        }
    }

    pub const fn is_requested(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the generator can actually scaffold this frontend.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::React | Self::None)
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frontend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| DomainError::UnknownOption {
                option: "frontend",
                value: s.into(),
            })
    }
}

/// Everything the generator needs to know, built once from CLI input.
///
/// ```rust
/// use autostack_core::domain::{Backend, Frontend, GenerationRequest, ProjectName};
///
/// let request = GenerationRequest::new(ProjectName::parse("shop").unwrap())
///     .frontend(Frontend::React)
///     .with_ci(true);
///
/// assert_eq!(request.backend, Backend::FastApi);
/// assert!(request.root().ends_with("shop"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub project_name: ProjectName,
    pub backend: Backend,
    pub frontend: Frontend,
    pub with_docker: bool,
    pub with_tests: bool,
    pub with_ci: bool,
    /// Parent directory the project root is created in.
    pub location: PathBuf,
}

impl GenerationRequest {
    /// A request with default options: fastapi backend, no frontend, no extras.
    pub fn new(project_name: ProjectName) -> Self {
        Self {
            project_name,
            backend: Backend::default(),
            frontend: Frontend::default(),
            with_docker: false,
            with_tests: false,
            with_ci: false,
            location: PathBuf::from("."),
        }
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn frontend(mut self, frontend: Frontend) -> Self {
        self.frontend = frontend;
        self
    }

    pub fn with_docker(mut self, enabled: bool) -> Self {
        self.with_docker = enabled;
        self
    }

    pub fn with_tests(mut self, enabled: bool) -> Self {
        self.with_tests = enabled;
        self
    }

    pub fn with_ci(mut self, enabled: bool) -> Self {
        self.with_ci = enabled;
        self
    }

    pub fn location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = location.into();
        self
    }

    /// The project root directory.
    pub fn root(&self) -> PathBuf {
        self.location.join(&self.project_name)
    }

    /// Reject option values that are accepted but produce no files.
    pub fn ensure_supported(&self) -> Result<(), DomainError> {
        if !self.backend.is_implemented() {
            return Err(DomainError::UnsupportedOption {
                option: "backend",
                value: self.backend.to_string(),
            });
        }
        if !self.frontend.is_implemented() {
            return Err(DomainError::UnsupportedOption {
                option: "frontend",
                value: self.frontend.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ProjectName {
        ProjectName::parse(raw).unwrap()
    }

    #[test]
    fn valid_names_pass() {
        for raw in ["my-project", "my_app", "project123", "MyApp", ".hidden"] {
            assert!(ProjectName::parse(raw).is_ok(), "failed for: {raw}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ProjectName::parse(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(ProjectName::parse("   ").is_err());
    }

    #[test]
    fn path_like_names_are_invalid() {
        for raw in ["a/b", "a\\b", "..", ".", "/abs"] {
            assert!(ProjectName::parse(raw).is_err(), "accepted: {raw}");
        }
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let request = GenerationRequest::new(name("demo"));
        assert_eq!(request.backend, Backend::FastApi);
        assert_eq!(request.frontend, Frontend::None);
        assert!(!request.with_docker && !request.with_tests && !request.with_ci);
        assert_eq!(request.root(), PathBuf::from("./demo"));
    }

    #[test]
    fn location_prefixes_root() {
        let request = GenerationRequest::new(name("demo")).location("/tmp/out");
        assert_eq!(request.root(), PathBuf::from("/tmp/out/demo"));
    }

    #[test]
    fn backend_and_frontend_parse_case_insensitively() {
        assert_eq!("FastAPI".parse::<Backend>().unwrap(), Backend::FastApi);
        assert_eq!("React".parse::<Frontend>().unwrap(), Frontend::React);
        assert!(matches!(
            "django".parse::<Backend>(),
            Err(DomainError::UnknownOption {
                option: "backend",
                ..
            })
        ));
    }

    #[test]
    fn supported_combinations_pass_strict_check() {
        let request = GenerationRequest::new(name("demo")).frontend(Frontend::React);
        assert!(request.ensure_supported().is_ok());
    }

    #[test]
    fn unimplemented_options_fail_strict_check() {
        let flask = GenerationRequest::new(name("demo")).backend(Backend::Flask);
        assert!(matches!(
            flask.ensure_supported(),
            Err(DomainError::UnsupportedOption {
                option: "backend",
                ..
            })
        ));

        let vue = GenerationRequest::new(name("demo")).frontend(Frontend::Vue);
        assert!(matches!(
            vue.ensure_supported(),
            Err(DomainError::UnsupportedOption {
                option: "frontend",
                ..
            })
        ));
    }

    #[test]
    fn options_serialize_lowercase() {
        let json = serde_json::to_value(GenerationRequest::new(name("demo"))).unwrap();
        assert_eq!(json["backend"], "fastapi");
        assert_eq!(json["frontend"], "none");
        assert_eq!(json["project_name"], "demo");
    }
}
