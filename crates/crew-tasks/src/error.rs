//! Error types for task construction

use thiserror::Error;

/// Errors raised while building stock analysis tasks
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required key is absent from a caller-supplied mapping
    #[error("Missing key '{key}' in {mapping}")]
    MissingKey {
        key: &'static str,
        mapping: &'static str,
    },

    /// A mapping input was some other kind of value
    #[error("Expected {0} to be a mapping")]
    NotAMapping(&'static str),

    /// Caller data could not be turned into prompt text
    #[error("Failed to serialize task input: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template registration or rendering failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] crew_prompt::PromptError),

    /// The rendered task was rejected
    #[error("Task error: {0}")]
    Task(#[from] crew_core::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::MissingKey {
            key: "CashFlowStatement",
            mapping: "financial_data",
        };
        assert_eq!(
            err.to_string(),
            "Missing key 'CashFlowStatement' in financial_data"
        );

        let err = TaskError::NotAMapping("combined_data");
        assert_eq!(err.to_string(), "Expected combined_data to be a mapping");
    }

    #[test]
    fn test_error_conversion() {
        let err: TaskError = crew_core::Error::EmptyField("description").into();
        assert!(matches!(err, TaskError::Task(_)));

        let err: TaskError = crew_prompt::PromptError::TemplateNotRegistered("x".into()).into();
        assert!(err.to_string().contains("not registered"));
    }
}
