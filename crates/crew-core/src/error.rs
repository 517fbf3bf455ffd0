//! Error types for crew-core

use thiserror::Error;

/// Result type alias for crew-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for task construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required text field was empty or whitespace only
    #[error("Task field '{0}' must not be empty")]
    EmptyField(&'static str),
}
