//! Integration tests for configuration loader
//!
//! Loads configuration files end to end and feeds the result into the
//! sender factory.

use std::io::Write;
use std::time::Duration;

use nylas_domain::constants::DEFAULT_USER_AGENT;
use nylas_domain::{NylasCredentials, NylasError};
use nylas_infra::config;
use nylas_infra::NylasRequestSenderFactory;
use tempfile::NamedTempFile;

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_json_file() {
    let file = write_config(
        ".json",
        r#"{
            "credentials": {
                "api_key": "json-key",
                "api_url": "https://api.eu.nylas.com",
                "grant_id": "json-grant"
            },
            "http": {
                "timeout_secs": 12,
                "connect_timeout_secs": 3,
                "user_agent": "calendar-sync/1.0"
            }
        }"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("load JSON");

    assert_eq!(config.credentials.api_key.as_deref(), Some("json-key"));
    assert_eq!(config.credentials.api_url.as_deref(), Some("https://api.eu.nylas.com"));
    assert_eq!(config.credentials.grant_id.as_deref(), Some("json-grant"));
    assert_eq!(config.http.timeout(), Duration::from_secs(12));
    assert_eq!(config.http.connect_timeout(), Duration::from_secs(3));
    assert_eq!(config.http.user_agent, "calendar-sync/1.0");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = write_config(
        ".toml",
        r#"
[credentials]
api_key = "toml-key"
grant_id = "toml-grant"

[http]
timeout_secs = 45
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("load TOML");

    assert_eq!(config.credentials.api_key.as_deref(), Some("toml-key"));
    assert_eq!(config.credentials.api_url, None);
    assert_eq!(config.http.timeout_secs, 45);
    assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn test_loaded_config_builds_factory() {
    let file = write_config(
        ".toml",
        r#"
[credentials]
api_key = "factory-key"
api_url = "https://api.us.nylas.com"
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("load TOML");
    let factory = NylasRequestSenderFactory::from_config(&config).expect("factory");

    assert_eq!(
        factory.defaults(),
        &NylasCredentials::new("factory-key", "https://api.us.nylas.com", "")
    );
}

#[test]
fn test_malformed_json_is_config_error() {
    let file = write_config(".json", r#"{ "credentials": { "api_key": "#);

    let result = config::load_from_file(Some(file.path().to_path_buf()));

    match result {
        Err(NylasError::Config(msg)) => assert!(msg.contains("Invalid JSON")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_wrong_field_type_is_config_error() {
    let file = write_config(
        ".toml",
        r#"
[http]
timeout_secs = "thirty"
"#,
    );

    let result = config::load_from_file(Some(file.path().to_path_buf()));

    assert!(matches!(result, Err(NylasError::Config(_))), "got {:?}", result);
}
