/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Query string pairs appended to a request
pub type Query<'a> = &'a [(&'a str, String)];

/// Thin JSON-over-HTTP wrapper bound to one base URL and access token
///
/// Every call returns either the parsed body of a response whose status is
/// the expected one, or an [`AppError`]:
/// - [`AppError::Network`] when no response came back,
/// - [`AppError::Json`] when a response with the expected status is not valid JSON,
/// - [`AppError::Unexpected`] with the parsed body when the status differs.
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    authorization: String,
}

impl HttpClient {
    /// Creates the wrapper from the client configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and REST settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to issue requests
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.credentials.base_url.trim_end_matches('/').to_string(),
            authorization: config.credentials.authorization_header(),
        })
    }

    /// Base URL every relative path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request expecting `200 OK`
    pub async fn get(&self, path: &str, query: Option<Query<'_>>) -> Result<Value, AppError> {
        self.request(Method::GET, path, StatusCode::OK, query, None::<&()>)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<Value, AppError> {
        self.request(Method::POST, path, expected, None, Some(body))
            .await
    }

    /// Makes a PUT request with an optional JSON body
    pub async fn put<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<Value, AppError> {
        self.request(Method::PUT, path, expected, None, body).await
    }

    /// Makes a request and checks its status against `expected`
    ///
    /// # Arguments
    /// * `method` - GET, POST or PUT
    /// * `path` - Path relative to the base URL (e.g. `accounts/ID/summary`)
    /// * `expected` - Status code that counts as success
    /// * `query` - Optional query string pairs
    /// * `body` - Optional JSON body
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
        query: Option<Query<'_>>,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        if !matches!(method, Method::GET | Method::POST | Method::PUT) {
            return Err(AppError::InvalidInput(format!("unsupported verb: {method}")));
        }
        let response = self.request_internal(method, path, query, body).await?;
        parse_response(response, expected).await
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = build_url(&self.base_url, path);

        let headers = vec![
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
            ("Accept-Datetime-Format", "RFC3339"),
        ];

        make_http_request(&self.http_client, method, &url, headers, query, body).await
    }
}

/// Joins the base URL and a relative path; absolute URLs are used as they are
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Sends one HTTP request and returns the raw response, whatever its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Optional query string pairs
/// * `body` - Optional request body (will be serialized to JSON)
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: Option<Query<'_>>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(query) = query {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Reads the body and matches the status against `expected`
async fn parse_response(response: Response, expected: StatusCode) -> Result<Value, AppError> {
    let status = response.status();
    let text = response.text().await?;

    if status == expected {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_str(&text)?);
    }

    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    error!("Request failed with status {} (expected {}): {}", status, expected, body);
    Err(AppError::Unexpected { status, body })
}
