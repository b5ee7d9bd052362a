//! Error types for docstore
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using DocError
pub type Result<T> = std::result::Result<T, DocError>;

/// Unified error type for docstore operations
#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // Wire Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Document not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error at {}: {source}", .path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}

impl DocError {
    /// Stable short name of the error, used in failure bodies
    pub fn kind(&self) -> &'static str {
        match self {
            DocError::Decode(_) => "decode_error",
            DocError::NotFound { .. } => "not_found",
            DocError::Io(_) | DocError::IoAt { .. } => "io_error",
            DocError::InvalidLocator(_) => "invalid_locator",
            DocError::Config(_) => "config_error",
            DocError::Network(_) => "network_error",
        }
    }

    /// Description safe to send to a client
    ///
    /// Server-side paths are left out; the full error goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            DocError::NotFound { .. } => "Document not found".to_string(),
            DocError::IoAt { source, .. } => format!("IO error: {}", source),
            other => other.to_string(),
        }
    }

    /// Wrap an I/O error with the path it happened on.
    ///
    /// `NotFound` kinds become [`DocError::NotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DocError::NotFound { path }
        } else {
            DocError::IoAt { path, source }
        }
    }
}
