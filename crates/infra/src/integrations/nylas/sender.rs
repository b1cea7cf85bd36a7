//! Authenticated request sender for the Nylas v3 API
//!
//! Decorates an injected [`HttpSender`]: composes the versioned, grant-scoped
//! URL, appends the bearer and JSON content-type headers, and turns transport
//! failures into a synthetic 500 response so `send` never fails.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nylas_domain::constants::{
    API_VERSION_SEGMENT, BEARER_PREFIX, GRANTS_SEGMENT, JSON_CONTENT_TYPE,
};
use nylas_domain::{NylasCredentials, NylasError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;
use crate::http::{HttpResponse, HttpSender, RequestOptions};

/// Sender bound to one credential record.
///
/// Cloning is cheap; clones share the transport and own a copy of the
/// credentials.
#[derive(Clone)]
pub struct NylasRequestSender {
    credentials: NylasCredentials,
    transport: Arc<dyn HttpSender>,
}

impl NylasRequestSender {
    pub fn new(credentials: NylasCredentials, transport: Arc<dyn HttpSender>) -> Self {
        Self { credentials, transport }
    }

    pub fn credentials(&self) -> &NylasCredentials {
        &self.credentials
    }

    /// `{api_url}/v3[/grants/{grant_id}]{path}`, without any encoding.
    pub fn url_for(&self, path: &str, include_grant_id: bool) -> String {
        let mut url = String::with_capacity(
            self.credentials.api_url.len()
                + API_VERSION_SEGMENT.len()
                + GRANTS_SEGMENT.len()
                + self.credentials.grant_id.len()
                + path.len(),
        );
        url.push_str(&self.credentials.api_url);
        url.push_str(API_VERSION_SEGMENT);
        if include_grant_id {
            url.push_str(GRANTS_SEGMENT);
            url.push_str(&self.credentials.grant_id);
        }
        url.push_str(path);
        url
    }

    /// Send one request to `path` and return whatever came back.
    ///
    /// Caller headers are kept; `Authorization` and `Content-Type` are
    /// appended after them. A transport failure is returned as a 500 response
    /// whose status text is the failure message.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn send(
        &self,
        path: &str,
        options: RequestOptions,
        include_grant_id: bool,
    ) -> HttpResponse {
        match self.dispatch(path, options, include_grant_id).await {
            Ok(response) => {
                debug!(status = %response.status, "Nylas request completed");
                response
            }
            Err(err) => {
                warn!(
                    error = %err,
                    kind = err.label(),
                    "Nylas request failed, returning synthetic response"
                );
                HttpResponse::failure(err.message())
            }
        }
    }

    /// [`send`](Self::send) with the grant segment included.
    pub async fn send_default(&self, path: &str, options: RequestOptions) -> HttpResponse {
        self.send(path, options, true).await
    }

    async fn dispatch(
        &self,
        path: &str,
        mut options: RequestOptions,
        include_grant_id: bool,
    ) -> Result<HttpResponse> {
        self.authenticate(&mut options.headers)?;
        let url = self.url_for(path, include_grant_id);

        debug!(url = %url, "dispatching Nylas request");
        self.transport.send(&url, options).await
    }

    fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let mut bearer =
            HeaderValue::from_str(&format!("{BEARER_PREFIX}{}", self.credentials.api_key))
                .map_err(|err| {
                    InfraError(NylasError::InvalidInput(format!(
                        "API key is not a valid header value: {err}"
                    )))
                })?;
        bearer.set_sensitive(true);

        headers.append(AUTHORIZATION, bearer);
        headers.append(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(())
    }
}

impl fmt::Debug for NylasRequestSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NylasRequestSender").field("credentials", &self.credentials).finish()
    }
}

/// A Nylas sender is itself a sending capability: `url` is taken as a path
/// relative to the grant-scoped base, and the call never fails.
#[async_trait]
impl HttpSender for NylasRequestSender {
    async fn send(&self, url: &str, options: RequestOptions) -> Result<HttpResponse> {
        Ok(NylasRequestSender::send(self, url, options, true).await)
    }
}
