use oanda_client::application::config::{Config, Credentials, StorageConfig};
use oanda_client::constants::{DEFAULT_DATA_PATH, DEFAULT_INSTRUMENTS_FILE, DEFAULT_REST_TIMEOUT};
use oanda_client::error::AppError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_credentials_from_json() {
    let credentials = Credentials::from_json(
        r#"{"API_KEY": "abc-123", "ACCOUNT_ID": "101-004-1-001", "OANDA_URL": "https://api-fxpractice.oanda.com/v3/"}"#,
    )
    .unwrap();
    assert_eq!(credentials.api_key, "abc-123");
    assert_eq!(credentials.account_id, "101-004-1-001");
    assert_eq!(credentials.base_url, "https://api-fxpractice.oanda.com/v3");
    assert_eq!(credentials.authorization_header(), "Bearer abc-123");
}

#[test]
fn test_credentials_rejects_empty_values() {
    let result =
        Credentials::from_json(r#"{"API_KEY": "", "ACCOUNT_ID": "1", "OANDA_URL": "http://x"}"#);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_credentials_rejects_missing_fields() {
    let result = Credentials::from_json(r#"{"API_KEY": "abc"}"#);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_credentials_debug_hides_api_key() {
    let credentials = Credentials::new("secret-token", "101-1", "http://localhost");
    let debug = format!("{:?}", credentials);
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("101-1"));
}

#[test]
fn test_serialized_config_omits_api_key() {
    let config = Config::with_credentials(Credentials::new(
        "secret-token",
        "101-1",
        "http://localhost",
    ));
    let serialized = serde_json::to_string(&config).unwrap();
    assert!(!serialized.contains("secret-token"));
    assert!(!serialized.contains("API_KEY"));
    assert!(serialized.contains("101-1"));

    let credentials = serde_json::to_value(&config.credentials).unwrap();
    assert!(credentials.get("API_KEY").is_none());
}

#[test]
fn test_config_from_credentials_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"API_KEY": "k", "ACCOUNT_ID": "a", "OANDA_URL": "http://localhost:1234/v3"}}"#
    )
    .unwrap();

    let config = Config::from_credentials_file(file.path()).unwrap();
    assert_eq!(config.credentials.base_url, "http://localhost:1234/v3");
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
    assert_eq!(config.storage, StorageConfig::default());
}

#[test]
fn test_config_from_missing_file() {
    let result = Config::from_credentials_file("/definitely/not/here.json");
    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("cannot read credentials file")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_storage_defaults_and_path() {
    let storage = StorageConfig::default();
    assert_eq!(storage.data_path, DEFAULT_DATA_PATH);
    assert_eq!(storage.instruments_file, DEFAULT_INSTRUMENTS_FILE);
    assert!(storage.persist_instruments);
    assert_eq!(
        storage.instruments_path(),
        Path::new(DEFAULT_DATA_PATH).join(DEFAULT_INSTRUMENTS_FILE)
    );
}

#[test]
fn test_without_persistence() {
    let config =
        Config::with_credentials(Credentials::new("k", "a", "http://localhost")).without_persistence();
    assert!(!config.storage.persist_instruments);
}
