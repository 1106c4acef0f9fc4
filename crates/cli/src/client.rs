//! Thin JSON client for the Tally HTTP API

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request; 204 and empty bodies come back as `Value::Null`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.base_url))?;
        let status = response.status();
        let text = response.text().await.context("Failed to read response")?;

        if !status.is_success() {
            anyhow::bail!(describe_error(status, &text));
        }

        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).context("Failed to parse response")?
        };
        serde_json::from_value(value).context("Unexpected response shape")
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::PATCH, path, None).await
    }
}

/// Render an error response, preferring the server's envelope
pub fn describe_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => format!(
            "{} ({}): {}",
            envelope.error.code,
            status.as_u16(),
            envelope.error.message
        ),
        Err(_) if status == StatusCode::UNAUTHORIZED => {
            "Not logged in. Run `tally login` first.".to_string()
        }
        Err(_) => format!("HTTP {}: {}", status.as_u16(), body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_envelope() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"Product 7 not found"}}"#;
        assert_eq!(
            describe_error(StatusCode::NOT_FOUND, body),
            "NOT_FOUND (404): Product 7 not found"
        );
    }

    #[test]
    fn test_describe_error_fallback() {
        assert_eq!(
            describe_error(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "HTTP 502: upstream down"
        );
    }

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new("http://localhost:8080/", None);
        assert_eq!(client.url("/healthz"), "http://localhost:8080/healthz");
    }
}
