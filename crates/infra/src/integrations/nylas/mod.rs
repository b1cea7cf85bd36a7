//! Nylas v3 API integration
//!
//! - [`NylasRequestSender`]: bearer/JSON headers plus grant-scoped URLs on
//!   top of any [`crate::http::HttpSender`]
//! - [`NylasRequestSenderFactory`]: default credentials with per-call
//!   overrides

pub mod factory;
pub mod sender;

pub use factory::{NylasRequestSenderFactory, RequestSenderFactory};
pub use sender::NylasRequestSender;
