//! Conversions from external infrastructure errors into domain errors.

use nylas_domain::NylasError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub NylasError);

impl From<InfraError> for NylasError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<NylasError> for InfraError {
    fn from(value: NylasError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoNylasError {
    fn into_nylas(self) -> NylasError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → NylasError */
/* -------------------------------------------------------------------------- */

impl IntoNylasError for HttpError {
    fn into_nylas(self) -> NylasError {
        if self.is_timeout() {
            return NylasError::Timeout(format!("HTTP request timed out: {self}"));
        }

        if self.is_builder() {
            return NylasError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return NylasError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return NylasError::Serialization(format!("failed to decode HTTP body: {self}"));
        }

        NylasError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_nylas())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / toml::de::Error → NylasError */
/* -------------------------------------------------------------------------- */

impl IntoNylasError for JsonError {
    fn into_nylas(self) -> NylasError {
        NylasError::Serialization(format!("invalid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_nylas())
    }
}

impl IntoNylasError for TomlError {
    fn into_nylas(self) -> NylasError {
        NylasError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_nylas())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
