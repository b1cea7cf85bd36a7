//! Generic request-sending capability.
//!
//! [`HttpSender`] is the seam between URL/credential handling and the actual
//! transport. The bundled implementation is [`crate::http::HttpClient`];
//! tests and callers can substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use nylas_domain::constants::FAILURE_STATUS_CODE;
use nylas_domain::Result;
use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::InfraError;

/// Trait for sending a single HTTP request to a fully qualified URL.
///
/// Implementations perform exactly one exchange per call and report
/// transport-level failures through the `Err` channel. HTTP error statuses are
/// ordinary responses.
///
/// Decorating senders that own a base URL, such as the Nylas sender, take a
/// path relative to that base instead.
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, url: &str, options: RequestOptions) -> Result<HttpResponse>;
}

/// Per-request configuration handed to an [`HttpSender`].
///
/// `Default` is the empty configuration: a bodyless `GET` with no headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Query pairs appended to the URL by the transport.
    pub query: Vec<(String, String)>,
    /// Overrides the transport's client-wide timeout for this request.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    /// Append a header, keeping any existing values for the same name.
    #[must_use]
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Serialize `body` as the JSON request body.
    ///
    /// # Errors
    /// Returns `NylasError::Serialization` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(InfraError::from)?;
        self.body = Some(bytes);
        Ok(self)
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response returned by an [`HttpSender`], or synthesized by the Nylas sender
/// when the transport fails.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response whose status text is the canonical reason phrase.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        Self { status, status_text, headers, body }
    }

    /// Synthetic 500 response carrying `message` as its status text.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(FAILURE_STATUS_CODE)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            status_text: message.into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    /// Returns `NylasError::Serialization` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|err| InfraError::from(err).into())
    }
}

#[cfg(test)]
mod tests {
    use nylas_domain::{NylasError, NylasResponse};
    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use serde_json::json;

    use super::*;

    #[test]
    fn default_options_are_empty_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert!(options.query.is_empty());
        assert!(options.timeout.is_none());
    }

    #[test]
    fn header_appends_instead_of_replacing() {
        let options = RequestOptions::new(Method::POST)
            .header(ACCEPT, HeaderValue::from_static("text/plain"))
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        assert_eq!(options.headers.get_all(ACCEPT).iter().count(), 2);
    }

    #[test]
    fn json_body_is_serialized() {
        let options = RequestOptions::new(Method::POST)
            .json(&json!({ "title": "Standup" }))
            .expect("serializable body");

        assert_eq!(options.body.as_deref(), Some(br#"{"title":"Standup"}"#.as_slice()));
        assert!(options.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn failure_response_is_500_with_message() {
        let response = HttpResponse::failure("Network Error");

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.status_text, "Network Error");
        assert!(!response.is_success());
        assert!(response.body.is_empty());
    }

    #[test]
    fn new_response_uses_canonical_reason() {
        let response = HttpResponse::new(StatusCode::NOT_FOUND, HeaderMap::new(), Vec::new());
        assert_eq!(response.status_text, "Not Found");
    }

    #[test]
    fn json_parses_envelope() {
        let body = br#"{"request_id":"r-1","data":{"id":"evt"}}"#.to_vec();
        let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), body);

        let envelope: NylasResponse<serde_json::Value> = response.json().expect("valid json");
        assert_eq!(envelope.request_id, "r-1");
        assert_eq!(envelope.data, Some(json!({ "id": "evt" })));
    }

    #[test]
    fn json_reports_serialization_error() {
        let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), b"<html>".to_vec());
        let result: Result<serde_json::Value> = response.json();
        assert!(matches!(result, Err(NylasError::Serialization(_))));
    }
}
