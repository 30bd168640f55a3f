/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Extraction of the expected keys from a successful response body.
//!
//! The service occasionally omits fields, so a missing key is reported as
//! [`AppError::MissingKeys`] instead of panicking. Single-key and multi-key
//! extraction are separate functions.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Returns the value stored under `key`
///
/// Fails with a `MissingKeys` listing only `key` when the body is not an
/// object or lacks the key.
pub fn extract_key(data: &Value, key: &str) -> Result<Value, AppError> {
    data.get(key)
        .cloned()
        .ok_or_else(|| AppError::missing_key(key))
}

/// Returns a map holding every requested key
///
/// When some keys are absent the error lists them and carries the requested
/// keys that were present, so callers can still use the partial payload.
pub fn extract_keys<S: AsRef<str>>(data: &Value, keys: &[S]) -> Result<Map<String, Value>, AppError> {
    let mut present = Map::new();
    let mut missing = Vec::new();

    for key in keys {
        let key = key.as_ref();
        match data.get(key) {
            Some(value) => {
                present.insert(key.to_string(), value.clone());
            }
            None => missing.push(key.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(present)
    } else {
        Err(AppError::MissingKeys { missing, present })
    }
}

/// Extracts `key` and deserializes it into `T`
pub fn from_key<T: DeserializeOwned>(data: &Value, key: &str) -> Result<T, AppError> {
    Ok(serde_json::from_value(extract_key(data, key)?)?)
}
