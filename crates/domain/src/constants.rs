//! Domain constants
//!
//! Centralized location for the values that shape Nylas requests.

// URL composition
pub const API_VERSION_SEGMENT: &str = "/v3";
pub const GRANTS_SEGMENT: &str = "/grants/";

// Headers
pub const BEARER_PREFIX: &str = "Bearer ";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Configuration defaults
pub const DEFAULT_API_URL: &str = "https://api.us.nylas.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("nylas-request-sender/", env!("CARGO_PKG_VERSION"));

// Synthetic failure responses
pub const FAILURE_STATUS_CODE: u16 = 500;
