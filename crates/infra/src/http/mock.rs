//! Recording [`HttpSender`] used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use nylas_domain::{NylasError, Result};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use super::sender::{HttpResponse, HttpSender, RequestOptions};

type Responder = Box<dyn Fn() -> Result<HttpResponse> + Send + Sync>;

/// Captures every `(url, options)` pair and answers with a canned outcome.
pub(crate) struct RecordingSender {
    calls: Mutex<Vec<(String, RequestOptions)>>,
    responder: Responder,
}

impl RecordingSender {
    pub(crate) fn responding(status: StatusCode, body: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(move || {
                Ok(HttpResponse::new(status, HeaderMap::new(), body.as_bytes().to_vec()))
            }),
        }
    }

    pub(crate) fn failing(error: NylasError) -> Self {
        Self { calls: Mutex::new(Vec::new()), responder: Box::new(move || Err(error.clone())) }
    }

    pub(crate) fn calls(&self) -> Vec<(String, RequestOptions)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl HttpSender for RecordingSender {
    async fn send(&self, url: &str, options: RequestOptions) -> Result<HttpResponse> {
        self.calls.lock().expect("calls mutex poisoned").push((url.to_string(), options));
        (self.responder)()
    }
}
