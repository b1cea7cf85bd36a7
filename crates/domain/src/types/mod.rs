//! Domain types and models

pub mod credentials;
pub mod response;

pub use credentials::{NylasCredentials, PartialCredentials};
pub use response::NylasResponse;
