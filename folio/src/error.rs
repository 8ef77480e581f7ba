//! Error types for `Folio`
//!
//! Aggregates the core configuration errors with server and I/O failures
//! and maps each to a process exit code.

use thiserror::Error;

pub use folio_core::error::{ConfigError, Severity, ValidationIssue};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `Folio` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid JSON/YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (bind failed, listener error)
    pub const SERVER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `Folio` operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP server error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Invalid command-line usage
    #[error("usage error: {0}")]
    Usage(#[from] clap::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bind address could not be parsed
    #[error("invalid bind address \"{input}\": {reason}")]
    InvalidAddress {
        /// Address as given on the command line
        input: String,
        /// Parser message
        reason: String,
    },

    /// Failed to bind the listener
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// Address that could not be bound
        addr: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The server loop stopped with an error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type alias for `Folio` operations.
pub type Result<T> = std::result::Result<T, FolioError>;
