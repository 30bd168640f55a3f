use crate::constants::{
    DEFAULT_CREDENTIALS_FILE, DEFAULT_DATA_PATH, DEFAULT_INSTRUMENTS_FILE, DEFAULT_REST_BASE_URL,
    DEFAULT_REST_TIMEOUT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the OANDA v20 REST API
///
/// The on-disk format uses the upper-case keys of the credentials file:
/// `{"API_KEY": "...", "ACCOUNT_ID": "...", "OANDA_URL": "..."}`.
/// The key is only read; serializing leaves it out.
pub struct Credentials {
    /// Personal access token
    #[serde(rename = "API_KEY", skip_serializing)]
    pub api_key: String,
    /// Account the client operates on (e.g. `101-004-1234567-001`)
    #[serde(rename = "ACCOUNT_ID")]
    pub account_id: String,
    /// REST endpoint, including the `/v3` prefix
    #[serde(rename = "OANDA_URL")]
    pub base_url: String,
}

impl Credentials {
    /// Creates credentials from their parts
    pub fn new(api_key: &str, account_id: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            account_id: account_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Loads credentials from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read credentials file {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parses credentials from a JSON document
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let credentials: Credentials = serde_json::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid credentials: {e}")))?;
        if credentials.api_key.is_empty() || credentials.account_id.is_empty() {
            return Err(AppError::Config(
                "API_KEY and ACCOUNT_ID must not be empty".to_string(),
            ));
        }
        Ok(Self::new(
            &credentials.api_key,
            &credentials.account_id,
            &credentials.base_url,
        ))
    }

    /// Value of the `Authorization` header sent with every request
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REST_TIMEOUT,
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Where the downloaded instrument list is written
pub struct StorageConfig {
    /// Directory for files written by the client
    pub data_path: String,
    /// File name of the instrument snapshot inside `data_path`
    pub instruments_file: String,
    /// Whether the instrument snapshot is written at all
    pub persist_instruments: bool,
}

impl StorageConfig {
    /// Full path of the instrument snapshot
    pub fn instruments_path(&self) -> PathBuf {
        Path::new(&self.data_path).join(&self.instruments_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            instruments_file: DEFAULT_INSTRUMENTS_FILE.to_string(),
            persist_instruments: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Instrument snapshot configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Builds the configuration from environment variables and an optional `.env` file
    ///
    /// Credentials come from `OANDA_API_KEY`, `OANDA_ACCOUNT_ID` and `OANDA_URL`.
    /// Missing credentials are reported but do not abort; the first request will
    /// fail with an authorization error instead.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("OANDA_API_KEY", String::from("default_api_key"));
        let account_id =
            get_env_or_default("OANDA_ACCOUNT_ID", String::from("default_account_id"));

        if api_key == "default_api_key" {
            error!("OANDA_API_KEY not found in environment variables or .env file");
        }
        if account_id == "default_account_id" {
            error!("OANDA_ACCOUNT_ID not found in environment variables or .env file");
        }

        let credentials = Credentials::new(
            &api_key,
            &account_id,
            &get_env_or_default("OANDA_URL", String::from(DEFAULT_REST_BASE_URL)),
        );

        Config {
            credentials,
            rest_api: RestApiConfig {
                timeout: get_env_or_default("OANDA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            storage: StorageConfig {
                data_path: get_env_or_default(
                    "OANDA_DATA_PATH",
                    String::from(DEFAULT_DATA_PATH),
                ),
                instruments_file: get_env_or_default(
                    "OANDA_INSTRUMENTS_FILE",
                    String::from(DEFAULT_INSTRUMENTS_FILE),
                ),
                persist_instruments: get_env_flag("OANDA_PERSIST_INSTRUMENTS", true),
            },
        }
    }

    /// Builds a configuration around explicit credentials and default settings
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// Builds a configuration from a credentials file and default settings
    pub fn from_credentials_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        Ok(Self::with_credentials(Credentials::from_file(path)?))
    }

    /// Same as [`Config::from_credentials_file`] with the conventional `./api/api_creds.json`
    pub fn from_default_credentials_file() -> Result<Self, AppError> {
        Self::from_credentials_file(DEFAULT_CREDENTIALS_FILE)
    }

    /// Disables writing the instrument snapshot
    pub fn without_persistence(mut self) -> Self {
        self.storage.persist_instruments = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
