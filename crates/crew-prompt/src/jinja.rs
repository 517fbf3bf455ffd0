//! Jinja templates rendered with MiniJinja

use crate::{PromptError, PromptTemplate, Result};
use minijinja::{Environment, UndefinedBehavior};

/// A named Jinja template
///
/// The source is checked for syntax errors when the template is built.
/// Rendering is strict: referencing a variable the caller did not supply
/// fails with [`PromptError::RenderError`] instead of producing an empty
/// string. Output is never HTML-escaped.
///
/// ```
/// use crew_prompt::{JinjaTemplate, PromptTemplate};
/// use serde_json::json;
///
/// let template = JinjaTemplate::new("research", "Research {{ company }} news")?;
/// let text = template.render(&json!({ "company": "ACME" }))?;
/// assert_eq!(text, "Research ACME news");
///
/// assert!(template.render(&json!({})).is_err());
/// # Ok::<(), crew_prompt::PromptError>(())
/// ```
pub struct JinjaTemplate {
    name: String,
    source: String,
}

impl JinjaTemplate {
    pub fn builder(name: impl Into<String>) -> JinjaTemplateBuilder {
        JinjaTemplateBuilder::new(name)
    }

    /// Create a template from its source, validating that it parses
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        Self::builder(name).source(source).build()
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

impl PromptTemplate for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, vars: &serde_json::Value) -> Result<String> {
        // Environment<'source> would otherwise tie the template to a lifetime
        let env = environment();
        let ctx = minijinja::Value::from_serialize(vars);

        env.render_str(&self.source, ctx)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }

    fn raw_template(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .field("len", &self.source.len())
            .finish()
    }
}

/// Builder for [`JinjaTemplate`]
///
/// ```
/// use crew_prompt::JinjaTemplate;
///
/// let template = JinjaTemplate::builder("stock.expected.recommend")
///     .source("A recommendation for {{ company }}.")
///     .build()?;
/// # Ok::<(), crew_prompt::PromptError>(())
/// ```
pub struct JinjaTemplateBuilder {
    name: String,
    source: Option<String>,
}

impl JinjaTemplateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Finish the template, failing if the source is missing or does not parse
    pub fn build(self) -> Result<JinjaTemplate> {
        let Some(source) = self.source else {
            return Err(PromptError::NoTemplateProvided(self.name));
        };

        let env = environment();
        env.template_from_str(&source)
            .map_err(|e| PromptError::TemplateParseFailed {
                name: self.name.clone(),
                detail: e.to_string(),
            })?;

        Ok(JinjaTemplate {
            name: self.name,
            source,
        })
    }
}
