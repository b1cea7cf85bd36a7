//! HTTP transport: the generic sending capability and its reqwest backend.

pub mod client;
pub mod sender;

pub use client::{HttpClient, HttpClientBuilder};
pub use sender::{HttpResponse, HttpSender, RequestOptions};

#[cfg(test)]
pub(crate) mod mock;
