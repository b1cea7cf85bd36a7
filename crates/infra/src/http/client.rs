use std::time::Duration;

use async_trait::async_trait;
use nylas_domain::{HttpConfig, NylasError, Result};
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use tracing::debug;

use super::sender::{HttpResponse, HttpSender, RequestOptions};
use crate::errors::InfraError;

/// Reqwest-backed [`HttpSender`] with timeout support.
///
/// Each call performs exactly one exchange; there is no retry.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Build a client from the transport section of the configuration.
    ///
    /// # Errors
    /// Returns `NylasError::Config` if a timeout is zero.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        Self::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSender for HttpClient {
    async fn send(&self, url: &str, options: RequestOptions) -> Result<HttpResponse> {
        let RequestOptions { method, headers, body, query, timeout } = options;

        let mut builder =
            self.client.request(method.clone(), url).headers(collapse_to_last(headers));
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        debug!(%method, url, "sending HTTP request");

        let response = builder.send().await.map_err(|err| {
            debug!(%method, url, error = %err, "HTTP request failed");
            NylasError::from(InfraError::from(err))
        })?;

        let status = response.status();
        debug!(%method, url, %status, "received HTTP response");

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(InfraError::from)?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
    bypass_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        let config = HttpConfig::default();
        Self {
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
            user_agent: None,
            default_headers: None,
            bypass_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub fn no_proxy(mut self) -> Self {
        self.bypass_proxy = true;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder =
            ReqwestClient::builder().timeout(self.timeout).connect_timeout(self.connect_timeout);

        if self.bypass_proxy {
            builder = builder.no_proxy();
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(InfraError::from)?;

        Ok(HttpClient { client })
    }
}

/// `Authorization` and `Content-Type` must reach the wire with a single value.
/// When a caller and a decorating sender both supplied one, the last appended
/// value is kept.
fn collapse_to_last(mut headers: HeaderMap) -> HeaderMap {
    for name in [AUTHORIZATION, CONTENT_TYPE] {
        let last = headers.get_all(&name).iter().last().cloned();
        if let Some(value) = last {
            headers.insert(name, value);
        }
    }
    headers
}
