//! REST client bound to one base URL.

use crate::error::RestError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client for one API host.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.bitbank.cc/v1")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let transport = ReqwestTransport::new(timeout)?;
        Ok(Self::with_transport(base_url, Arc::new(transport)))
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a REST client on top of an existing transport.
    pub fn with_transport(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and return the raw response.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/btc_jpy/ticker")
    /// * `query` - Optional query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn get(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<HttpResponse, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request");

        self.transport
            .send(HttpRequest {
                method: Method::Get,
                url,
                headers: owned_headers(headers),
                body: None,
            })
            .await
    }

    /// Make a GET request and deserialize a successful JSON response.
    ///
    /// Non-2xx statuses become `RestError::HttpError` carrying the body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let response = self.get(path, query, headers).await?;
        Self::handle_response(response)
    }

    /// Make a POST request with a JSON body and return the raw response.
    ///
    /// The body is sent exactly as given so that it matches the signed bytes.
    pub async fn post_json(
        &self,
        path: &str,
        body: String,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<HttpResponse, RestError> {
        let url = self.build_url(path, None);
        tracing::debug!(url = %url, "POST request");

        let mut headers = owned_headers(headers);
        if !headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("Content-Type"))
        {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        self.transport
            .send(HttpRequest {
                method: Method::Post,
                url,
                headers,
                body: Some(body),
            })
            .await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Check the status and deserialize the JSON body.
    fn handle_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, RestError> {
        if response.is_success() {
            response.json()
        } else {
            Err(RestError::HttpError {
                status: response.status,
                message: response.body,
            })
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn owned_headers(headers: Option<&[(&str, &str)]>) -> Vec<(String, String)> {
    headers
        .unwrap_or_default()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
