//! Prompt template management for stock-crew
//!
//! This crate provides named prompt templates with Jinja2 variable
//! interpolation, a registry that looks them up by name, and a helper that turns
//! arbitrary caller data into prompt text.
//!
//! # Quick Start
//!
//! ```
//! use crew_prompt::{JinjaTemplate, PromptRegistry, PromptTemplate};
//! use serde_json::json;
//!
//! let template = JinjaTemplate::new("analyzer", "Analyze {{ symbol }}")?;
//! assert_eq!(template.render(&json!({ "symbol": "AAPL" }))?, "Analyze AAPL");
//!
//! let mut registry = PromptRegistry::new();
//! registry.register(template)?;
//! assert!(registry.contains("analyzer"));
//! # Ok::<(), crew_prompt::PromptError>(())
//! ```

mod error;
mod jinja;
mod registry;
mod template;
mod value;

// Re-export core types
pub use error::{PromptError, Result};
pub use jinja::{JinjaTemplate, JinjaTemplateBuilder};
pub use registry::PromptRegistry;
pub use template::PromptTemplate;
pub use value::render_value;
