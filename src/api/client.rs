/// HTTP client bound to the Habitica API
///
/// One reqwest client is built at startup carrying the static
/// authentication headers; every tool call goes through it exactly once.
/// There are no retries, no caching and no timeout beyond the client's
/// defaults.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::api::ApiError;
use crate::config::Config;

/// Client carrying the static Habitica authentication headers
pub struct HabiticaClient {
    http: reqwest::Client,
    base_url: String,
}

impl HabiticaClient {
    /// Build a client from the resolved configuration
    ///
    /// The x-api-user and x-api-key headers authenticate every request;
    /// x-client identifies this integration to Habitica.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-user", HeaderValue::from_str(&config.user_id)?);
        headers.insert("x-api-key", HeaderValue::from_str(&config.api_token)?);
        headers.insert(
            "x-client",
            HeaderValue::from_str(&format!("{}-habitica-mcp-server", config.user_id))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// GET a path relative to the API base
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, &[], None).await
    }

    /// GET with query parameters
    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    /// POST without a body
    pub async fn post(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::POST, path, &[], None).await
    }

    /// POST with query parameters
    pub async fn post_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.request(Method::POST, path, query, None).await
    }

    /// POST with a JSON body
    pub async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// PUT with a JSON body
    pub async fn put_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// DELETE a path
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Issue one request and decode the response envelope
    ///
    /// Non-2xx responses become `ApiError::Api` carrying the vendor error
    /// code when the body provides one.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("request failed");
            let (code, message) = match serde_json::from_str::<Value>(&text) {
                Ok(body) => (
                    body.get("error").and_then(Value::as_str).map(str::to_string),
                    body.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or(fallback)
                        .to_string(),
                ),
                Err(_) => (None, fallback.to_string()),
            };
            debug!(
                path,
                status = status.as_u16(),
                code = code.as_deref().unwrap_or("-"),
                "Habitica request failed: {}",
                message
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
