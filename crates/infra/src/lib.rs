//! # Nylas Infrastructure
//!
//! Everything that performs I/O for the Nylas request sender.
//!
//! This crate contains:
//! - The generic [`http::HttpSender`] capability and its reqwest backend
//! - The authenticated Nylas sender and its factory
//! - Configuration loading from the environment or files
//! - Conversions from third-party errors into `NylasError`
//!
//! ## Architecture
//! - Depends on `nylas-domain` for data shapes and errors
//! - Transports are injected as `Arc<dyn HttpSender>`; nothing here reaches
//!   for an ambient global client

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, HttpResponse, HttpSender, RequestOptions};
pub use integrations::nylas::{
    NylasRequestSender, NylasRequestSenderFactory, RequestSenderFactory,
};
