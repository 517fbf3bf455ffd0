//! Prompt errors

use thiserror::Error;

/// Result type for prompt operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors raised while building, registering or rendering templates
#[derive(Error, Debug)]
pub enum PromptError {
    /// The template source is not valid Jinja
    #[error("Template '{name}' does not parse: {detail}")]
    TemplateParseFailed { name: String, detail: String },

    /// Rendering failed, usually because a variable was not supplied
    #[error("Template '{name}' failed to render: {detail}")]
    RenderError { name: String, detail: String },

    /// The builder was finished without a source
    #[error("Template '{0}' has no source")]
    NoTemplateProvided(String),

    /// Lookup of an unknown template name
    #[error("Template '{0}' not registered")]
    TemplateNotRegistered(String),

    /// A second template was registered under a taken name
    #[error("Template '{0}' is already registered")]
    DuplicateTemplate(String),
}
