//! Error types for Turnstile operations.
//!
//! This module defines [`TurnstileError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TurnstileError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TurnstileError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Turnstile operations.
#[derive(Debug, Error)]
pub enum TurnstileError {
    /// Target project directory does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// Python interpreter could not be located on PATH.
    #[error("Python interpreter '{name}' not found on PATH")]
    InterpreterNotFound { name: String },

    /// Subprocess failed to spawn or was killed before exiting.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An endpoint returned a non-success status.
    #[error("{step}: expected HTTP 200, got {status}")]
    EndpointStatus { step: String, status: u16 },

    /// The request never produced a response (connection refused, timeout).
    #[error("{step}: request failed: {message}")]
    EndpointRequest { step: String, message: String },

    /// The response body did not have the expected shape.
    #[error("{step}: unexpected response body: {message}")]
    EndpointBody { step: String, message: String },

    /// The service process could not be started.
    #[error("Failed to start server: {message}")]
    ServerLaunchFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Turnstile operations.
pub type Result<T> = std::result::Result<T, TurnstileError>;
