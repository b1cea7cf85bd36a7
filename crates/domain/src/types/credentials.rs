//! Credential records
//!
//! A [`NylasCredentials`] value is the tenant-scoped authentication context a
//! sender is bound to. Fields are never validated; empty strings are legal and
//! only fail later, at send time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Complete credential record: API key, API base URL and grant id.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NylasCredentials {
    pub api_key: String,
    pub api_url: String,
    pub grant_id: String,
}

impl NylasCredentials {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        grant_id: impl Into<String>,
    ) -> Self {
        Self { api_key: api_key.into(), api_url: api_url.into(), grant_id: grant_id.into() }
    }

    /// Return a new record with every field present in `overrides` replaced.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn merged_with(&self, overrides: &PartialCredentials) -> Self {
        Self {
            api_key: overrides.api_key.clone().unwrap_or_else(|| self.api_key.clone()),
            api_url: overrides.api_url.clone().unwrap_or_else(|| self.api_url.clone()),
            grant_id: overrides.grant_id.clone().unwrap_or_else(|| self.grant_id.clone()),
        }
    }
}

// The API key is a secret; keep it out of logs and panic messages.
impl fmt::Debug for NylasCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NylasCredentials")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("grant_id", &self.grant_id)
            .finish()
    }
}

/// Any subset of the credential fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
}

impl PartialCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    #[must_use]
    pub fn with_grant_id(mut self, grant_id: impl Into<String>) -> Self {
        self.grant_id = Some(grant_id.into());
        self
    }

    /// Fill missing fields with empty strings.
    pub fn into_complete(self) -> NylasCredentials {
        NylasCredentials::default().merged_with(&self)
    }
}

impl fmt::Debug for PartialCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("grant_id", &self.grant_id)
            .finish()
    }
}

impl From<NylasCredentials> for PartialCredentials {
    fn from(value: NylasCredentials) -> Self {
        Self {
            api_key: Some(value.api_key),
            api_url: Some(value.api_url),
            grant_id: Some(value.grant_id),
        }
    }
}
