//! Configuration structures
//!
//! Loaded by `nylas-infra`'s config loader from the environment or from a
//! JSON/TOML file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::errors::{NylasError, Result};
use crate::types::PartialCredentials;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NylasConfig {
    /// Default credentials handed to the sender factory
    #[serde(default)]
    pub credentials: PartialCredentials,
    /// Transport settings for the bundled HTTP client
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Both timeouts must be at least one second.
    ///
    /// # Errors
    /// Returns `NylasError::Config` naming the first zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(NylasError::Config("timeout_secs must be greater than zero".to_string()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(NylasError::Config(
                "connect_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
