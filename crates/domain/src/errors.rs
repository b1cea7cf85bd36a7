//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Nylas request sender
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum NylasError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NylasError {
    /// The bare failure message, without the category prefix used by
    /// `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Timeout(message)
            | Self::Config(message)
            | Self::InvalidInput(message)
            | Self::Serialization(message)
            | Self::Internal(message) => message,
        }
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Nylas operations
pub type Result<T> = std::result::Result<T, NylasError>;
