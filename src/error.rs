//! Error types for interpreting instant inputs.

use thiserror::Error;

/// Errors that can occur when resolving an instant for formatting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unparseable date text: '{input}'")]
    InvalidDate { input: String },
}
