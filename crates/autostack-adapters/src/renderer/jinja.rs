//! minijinja-backed renderer over the embedded templates.

use std::collections::HashMap;

use minijinja::{Environment, UndefinedBehavior};
use tracing::instrument;

use autostack_core::{
    application::{GenerationError, ports::TemplateRenderer},
    domain::{TemplateContext, TemplateName},
    error::{AutostackError, AutostackResult},
};

use crate::builtin_templates;

/// Renders templates with minijinja.
///
/// Sources are resolved lazily through a loader, so a missing or corrupt
/// template only fails the render call that needs it. Undefined values are
/// errors rather than empty strings.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Renderer over the built-in templates.
    pub fn new() -> Self {
        Self::from_sources(builtin_templates::all_templates())
    }

    /// Renderer over an explicit set of template sources.
    pub fn from_sources(sources: impl IntoIterator<Item = (TemplateName, &'static str)>) -> Self {
        let sources: HashMap<&'static str, &'static str> = sources
            .into_iter()
            .map(|(name, source)| (name.file_name(), source))
            .collect();

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_loader(move |name| Ok(sources.get(name).map(|s| (*s).to_string())));

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: TemplateName, context: &TemplateContext) -> AutostackResult<String> {
        let compiled = self
            .env
            .get_template(template.file_name())
            .map_err(|e| render_error(template, &e))?;

        compiled
            .render(context)
            .map_err(|e| render_error(template, &e))
    }
}

fn render_error(template: TemplateName, e: &minijinja::Error) -> AutostackError {
    GenerationError::TemplateRender {
        template: template.to_string(),
        reason: e.to_string(),
    }
    .into()
}
