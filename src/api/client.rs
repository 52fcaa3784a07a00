use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::util::get_value;

/// A response of any status, with its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `Null` when the body was empty, or was not JSON on an error status.
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Nested field of the body, see [`get_value`].
    pub fn field(&self, path: &[&str]) -> Option<&Value> {
        get_value(&self.body, path)
    }
}

/// JSON client for the quotes API.
///
/// Keeps a cookie store so the backend session survives across calls.
/// Cheap to clone; clones share the connection pool and cookies.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/quotes/`.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl { url: raw })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(path)?;
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })?;
        self.request(Method::POST, path, Some(body)).await
    }

    /// Send one JSON request and collect the response whatever its status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(path)?;
        let url_str = url.to_string();

        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| ApiError::Connection {
            url: url_str.clone(),
            source: e,
        })?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) if (200..300).contains(&status) => {
                    return Err(ApiError::Decode {
                        url: url_str,
                        source: e,
                    });
                }
                Err(_) => Value::Null,
            }
        };

        tracing::debug!(%method, url = %url_str, status, "API request completed");
        Ok(ApiResponse { status, body })
    }
}
