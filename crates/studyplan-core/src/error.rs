//! Core error types for studyplan-core.
//!
//! Planning itself is total over well-formed input, so the only failures are
//! input validation, configuration problems, and errors surfaced from an
//! external task source.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Planning errors
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a plan.
///
/// Every variant is raised before any scheduling happens, so a failed call
/// never yields partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Goals were missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// The start timestamp could not be parsed
    #[error("Invalid start date format: '{input}' ({message})")]
    InvalidStartDate { input: String, message: String },

    /// An external task source failed or returned nothing usable
    #[error("Upstream service '{service}' failed: {message}")]
    UpstreamService { service: String, message: String },
}

impl PlanError {
    /// HTTP status an HTTP shim should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::InvalidInput(_) | PlanError::InvalidStartDate { .. } => 400,
            PlanError::UpstreamService { .. } => 502,
        }
    }

    /// Short message for the `{ "error": ... }` response body.
    pub fn public_message(&self) -> String {
        match self {
            PlanError::InvalidInput(message) => message.clone(),
            PlanError::InvalidStartDate { .. } => "Invalid start date format".to_string(),
            PlanError::UpstreamService { message, .. } => message.clone(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not name a configuration field
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
