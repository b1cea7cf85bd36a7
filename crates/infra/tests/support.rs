use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use nylas_domain::NylasCredentials;
use nylas_infra::{HttpClient, HttpSender};
use tracing_subscriber::EnvFilter;

pub const TEST_API_KEY: &str = "mockApiKey";
pub const TEST_GRANT_ID: &str = "mockGrantId";

/// Route `tracing` output through the test harness. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Reqwest transport with a short timeout for tests.
pub fn test_transport() -> Arc<dyn HttpSender> {
    Arc::new(
        HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .expect("http client should build"),
    )
}

/// Credentials pointing at a mock server.
pub fn credentials_for(api_url: impl Into<String>) -> NylasCredentials {
    NylasCredentials::new(TEST_API_KEY, api_url, TEST_GRANT_ID)
}

/// A loopback URL nothing is listening on, so connections are refused.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener); // release the port so that requests fail with ECONNREFUSED
    format!("http://{addr}")
}
