//! Core types for stock-crew
//!
//! This crate defines the task descriptor handed to an external agent-execution
//! engine, together with a lightweight agent handle and the shared error type.

pub mod agent;
pub mod error;
pub mod task;

pub use agent::AgentRef;
pub use error::{Error, Result};
pub use task::Task;
