//! Error types for the Teczka library.
//!
//! All errors are represented by the [`TeczkaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use teczka::error::{Result, TeczkaError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(TeczkaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Teczka operations.
///
/// This enum represents all possible errors that can occur in the Teczka
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum TeczkaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model-related errors (vectorization, training, prediction)
    #[error("Model error: {0}")]
    Model(String),

    /// Service-related errors (mode handling, store access)
    #[error("Service error: {0}")]
    Service(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TeczkaError.
pub type Result<T> = std::result::Result<T, TeczkaError>;

impl TeczkaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Model(msg.into())
    }

    /// Create a new service error.
    pub fn service<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Service(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        TeczkaError::Other(format!("Not found: {}", msg.into()))
    }
}
