//! Error types for provider evaluation
//!
//! This module provides standalone error types for the confdoc ecosystem,
//! shared between the extraction engine and provider implementations.

use thiserror::Error;

/// Errors that can occur while evaluating a provider call.
#[derive(Error, Debug)]
pub enum Error {
    /// Provider evaluation failed in the hosting interpreter.
    #[error("Provider evaluation failed: {message}")]
    Eval {
        /// Error message describing the evaluation failure
        message: String,
    },
}

impl Error {
    /// Create an evaluation error
    #[must_use]
    pub fn eval(message: impl Into<String>) -> Self {
        Self::Eval {
            message: message.into(),
        }
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;
