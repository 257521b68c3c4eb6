//! Built-in templates, embedded into the binary at compile time.
//!
//! Every [`TemplateName`] has exactly one source here. The files live in
//! `crates/autostack-adapters/templates/` and use minijinja syntax; the
//! only values they may reference are the ones the generator puts in the
//! render context (`project_name`, `frontend`).

use autostack_core::domain::TemplateName;

/// Template source for a built-in template.
pub const fn source(name: TemplateName) -> &'static str {
    match name {
        TemplateName::Gitignore => include_str!("../templates/gitignore.j2"),
        TemplateName::Readme => include_str!("../templates/README.md.j2"),
        TemplateName::FastapiMain => include_str!("../templates/fastapi_main.py.j2"),
        TemplateName::FastapiRequirements => {
            include_str!("../templates/fastapi_requirements.txt.j2")
        }
        TemplateName::BackendDockerfile => include_str!("../templates/Dockerfile.j2"),
        TemplateName::DockerCompose => include_str!("../templates/docker-compose.yml.j2"),
        TemplateName::FrontendDockerfile => include_str!("../templates/Dockerfile.frontend.j2"),
        TemplateName::CiWorkflow => include_str!("../templates/ci.yml.j2"),
        TemplateName::FastapiTest => include_str!("../templates/test_main.py.j2"),
    }
}

/// All built-in templates as `(name, source)` pairs.
pub fn all_templates() -> impl Iterator<Item = (TemplateName, &'static str)> {
    TemplateName::ALL.into_iter().map(|name| (name, source(name)))
}
