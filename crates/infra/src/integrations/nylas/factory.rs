//! Sender factory
//!
//! Holds the default credential record and hands out senders, optionally
//! overriding individual fields per call.

use std::sync::Arc;

use nylas_domain::{NylasConfig, NylasCredentials, PartialCredentials, Result};
use tracing::debug;

use super::sender::NylasRequestSender;
use crate::http::{HttpClient, HttpSender};

/// Trait for producing configured senders.
pub trait RequestSenderFactory: Send + Sync {
    type Sender;

    /// Create a sender using the stored defaults overlaid with `overrides`.
    fn create(&self, overrides: PartialCredentials) -> Self::Sender;
}

/// Factory for [`NylasRequestSender`] instances sharing one transport.
#[derive(Clone)]
pub struct NylasRequestSenderFactory {
    defaults: NylasCredentials,
    transport: Arc<dyn HttpSender>,
}

impl NylasRequestSenderFactory {
    /// Missing fields in `defaults` become empty strings.
    pub fn new(defaults: PartialCredentials, transport: Arc<dyn HttpSender>) -> Self {
        Self { defaults: defaults.into_complete(), transport }
    }

    /// Build the reqwest transport and the default credentials from
    /// configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &NylasConfig) -> Result<Self> {
        let transport = HttpClient::from_config(&config.http)?;
        Ok(Self::new(config.credentials.clone(), Arc::new(transport)))
    }

    pub fn defaults(&self) -> &NylasCredentials {
        &self.defaults
    }

    /// Create a sender; fields present in `overrides` win. The stored defaults
    /// are never modified.
    pub fn create(&self, overrides: PartialCredentials) -> NylasRequestSender {
        let credentials = self.defaults.merged_with(&overrides);
        debug!(
            api_url = %credentials.api_url,
            grant_id = %credentials.grant_id,
            api_key_overridden = overrides.api_key.is_some(),
            "creating Nylas request sender"
        );
        NylasRequestSender::new(credentials, Arc::clone(&self.transport))
    }

    /// Create a sender bound to exactly the stored defaults.
    pub fn create_default(&self) -> NylasRequestSender {
        self.create(PartialCredentials::default())
    }
}

impl RequestSenderFactory for NylasRequestSenderFactory {
    type Sender = NylasRequestSender;

    fn create(&self, overrides: PartialCredentials) -> Self::Sender {
        NylasRequestSenderFactory::create(self, overrides)
    }
}

impl std::fmt::Debug for NylasRequestSenderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NylasRequestSenderFactory").field("defaults", &self.defaults).finish()
    }
}
