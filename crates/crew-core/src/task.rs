//! Task descriptor handed to the execution engine
//!
//! A [`Task`] bundles a rendered instruction, the agent expected to carry it
//! out, and a description of the output that completes it. Tasks are built
//! once and never mutated afterwards; the engine owns scheduling, model calls
//! and passing results from one task to the next.

use crate::{Error, Result};
use serde::Serialize;

/// An immutable instruction bundle for an external agent-execution engine
///
/// The agent type is opaque to this crate: any value the engine accepts as an
/// executor can be carried through.
///
/// # Example
///
/// ```
/// use crew_core::{AgentRef, Task};
///
/// let task = Task::new(
///     "Summarize the latest news for ACME.",
///     AgentRef::new("research_analyst"),
///     "A news summary.",
/// )?
/// .with_prompt("You are analyzing ACME.")?;
///
/// assert_eq!(task.agent().name(), "research_analyst");
/// assert_eq!(task.prompt(), Some("You are analyzing ACME."));
/// # Ok::<(), crew_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task<A> {
    description: String,
    agent: A,
    expected_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
}

impl<A> Task<A> {
    /// Create a task without an auxiliary prompt
    ///
    /// Fails if `description` or `expected_output` is blank.
    pub fn new(
        description: impl Into<String>,
        agent: A,
        expected_output: impl Into<String>,
    ) -> Result<Self> {
        let description = non_empty("description", description.into())?;
        let expected_output = non_empty("expected_output", expected_output.into())?;

        Ok(Self {
            description,
            agent,
            expected_output,
            prompt: None,
        })
    }

    /// Attach the auxiliary structured prompt
    ///
    /// Consumes the task, so a prompt can only be set while the task is still
    /// being assembled.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Result<Self> {
        self.prompt = Some(non_empty("prompt", prompt.into())?);
        Ok(self)
    }

    /// Get the instruction text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the agent assigned to this task
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Get the description of the output that completes this task
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// Get the auxiliary prompt, if this task carries one
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AgentRef;
    use serde_json::json;

    #[test]
    fn test_new_task() {
        let task = Task::new("Do the thing", AgentRef::new("worker"), "A thing").unwrap();

        assert_eq!(task.description(), "Do the thing");
        assert_eq!(task.expected_output(), "A thing");
        assert_eq!(task.agent().name(), "worker");
        assert!(task.prompt().is_none());
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = Task::new("  \n", (), "output").unwrap_err();
        assert_eq!(err, Error::EmptyField("description"));
    }

    #[test]
    fn test_empty_expected_output_rejected() {
        let err = Task::new("description", (), "").unwrap_err();
        assert_eq!(err, Error::EmptyField("expected_output"));
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let task = Task::new("description", (), "output").unwrap();
        assert_eq!(task.with_prompt("").unwrap_err(), Error::EmptyField("prompt"));
    }

    #[test]
    fn test_serialize_without_prompt() {
        let task = Task::new("describe", AgentRef::new("analyst"), "report").unwrap();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "describe",
                "agent": "analyst",
                "expected_output": "report"
            })
        );
    }

    #[test]
    fn test_serialize_with_prompt() {
        let task = Task::new("describe", AgentRef::new("analyst"), "report")
            .unwrap()
            .with_prompt("detailed")
            .unwrap();

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["prompt"], json!("detailed"));
    }
}
