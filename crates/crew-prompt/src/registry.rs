//! Named template lookup
//!
//! A [`PromptRegistry`] is filled once, when its owner is constructed, and is
//! read-only afterwards. Names are kept in sorted order.

use crate::{PromptError, PromptTemplate, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Templates keyed by name
///
/// # Examples
///
/// ```
/// use crew_prompt::{JinjaTemplate, PromptRegistry};
/// use serde_json::json;
///
/// let mut registry = PromptRegistry::new();
/// registry.register(JinjaTemplate::new("news", "Latest news on {{ subject }}")?)?;
///
/// let text = registry.render("news", &json!({ "subject": "ACME" }))?;
/// assert_eq!(text, "Latest news on ACME");
/// # Ok::<(), crew_prompt::PromptError>(())
/// ```
#[derive(Default, Clone)]
pub struct PromptRegistry {
    templates: BTreeMap<String, Arc<dyn PromptTemplate>>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under its own name
    ///
    /// Fails with [`PromptError::DuplicateTemplate`] if the name is taken.
    pub fn register<T: PromptTemplate + 'static>(&mut self, template: T) -> Result<()> {
        self.register_arc(Arc::new(template))
    }

    /// Add a shared template under its own name
    pub fn register_arc(&mut self, template: Arc<dyn PromptTemplate>) -> Result<()> {
        let name = template.name().to_string();
        if self.templates.contains_key(&name) {
            return Err(PromptError::DuplicateTemplate(name));
        }
        self.templates.insert(name, template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PromptTemplate>> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render the template registered as `name`
    pub fn render(&self, name: &str, vars: &Value) -> Result<String> {
        self.get(name)
            .ok_or_else(|| PromptError::TemplateNotRegistered(name.to_string()))?
            .render(vars)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for PromptRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRegistry")
            .field("templates", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
