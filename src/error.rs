/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every layer of the client.
//!
//! Failures fall in three groups that callers usually want to treat
//! differently:
//!
//! * transport failures ([`AppError::Network`], [`AppError::Json`]) where a retry may help,
//! * unexpected status codes ([`AppError::Unexpected`]) carrying the server body,
//! * schema mismatches ([`AppError::MissingKeys`]) where the response was accepted but
//!   lacked a field the client needs.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// The response body could not be parsed as JSON
    Json(serde_json::Error),
    /// Local file access failed
    Io(std::io::Error),
    /// The server answered with a status other than the expected one
    Unexpected {
        /// Status code returned by the server
        status: StatusCode,
        /// Parsed JSON body, or the raw text as a JSON string when it was not JSON
        body: Value,
    },
    /// A successful response lacked one or more required keys
    MissingKeys {
        /// Keys that were requested but absent
        missing: Vec<String>,
        /// The requested keys that were present, with their values
        present: Map<String, Value>,
    },
    /// The instrument list could not be downloaded during client construction
    InstrumentsUnavailable(String),
    /// The instrument is not part of the account's cached instrument list
    UnknownInstrument(String),
    /// The requested item does not exist
    NotFound,
    /// The caller supplied an argument the API cannot accept
    InvalidInput(String),
    /// A value was present but had the wrong shape
    Deserialization(String),
    /// Configuration could not be loaded
    Config(String),
}

impl AppError {
    /// Builds a [`AppError::MissingKeys`] for a single absent key.
    pub fn missing_key(key: &str) -> Self {
        AppError::MissingKeys {
            missing: vec![key.to_string()],
            present: Map::new(),
        }
    }

    /// True for failures where nothing usable came back from the server.
    ///
    /// These are the only failures worth retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Json(_))
    }

    /// True when the server accepted the request but the response lacked required keys.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, AppError::MissingKeys { .. })
    }

    /// Status code of an [`AppError::Unexpected`] failure
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Body passed through by an [`AppError::Unexpected`] failure
    pub fn body(&self) -> Option<&Value> {
        match self {
            AppError::Unexpected { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unexpected { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::MissingKeys { missing, .. } => {
                write!(f, "missing keys: {}", missing.join(", "))
            }
            AppError::InstrumentsUnavailable(msg) => write!(f, "instruments unavailable: {msg}"),
            AppError::UnknownInstrument(name) => write!(f, "unknown instrument: {name}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(error: chrono::ParseError) -> Self {
        AppError::Deserialization(error.to_string())
    }
}

/// Shorthand result type used across the crate
pub type AppResult<T> = Result<T, AppError>;
