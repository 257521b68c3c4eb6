//! Built-in template names and their render context.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The closed set of templates the generator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateName {
    Gitignore,
    Readme,
    FastapiMain,
    FastapiRequirements,
    BackendDockerfile,
    DockerCompose,
    FrontendDockerfile,
    CiWorkflow,
    FastapiTest,
}

impl TemplateName {
    pub const ALL: [TemplateName; 9] = [
        Self::Gitignore,
        Self::Readme,
        Self::FastapiMain,
        Self::FastapiRequirements,
        Self::BackendDockerfile,
        Self::DockerCompose,
        Self::FrontendDockerfile,
        Self::CiWorkflow,
        Self::FastapiTest,
    ];

    /// Template file name, as registered with the renderer.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Gitignore => "gitignore.j2",
            Self::Readme => "README.md.j2",
            Self::FastapiMain => "fastapi_main.py.j2",
            Self::FastapiRequirements => "fastapi_requirements.txt.j2",
            Self::BackendDockerfile => "Dockerfile.j2",
            Self::DockerCompose => "docker-compose.yml.j2",
            Self::FrontendDockerfile => "Dockerfile.frontend.j2",
            Self::CiWorkflow => "ci.yml.j2",
            Self::FastapiTest => "test_main.py.j2",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Named values for a single render call.
///
/// Ordered so that rendering and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: BTreeMap<String, String>,
}

impl TemplateContext {
    /// An empty context, for templates without parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self and returning the extended context.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
