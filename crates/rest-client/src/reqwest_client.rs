//! reqwest-backed REST client
//!
//! Direct implementation of the `RestClient` trait that performs real HTTP
//! calls against a fixed base URL.

use crate::client::RestClient;
use crate::error::ClientError;
use crate::types::HttpRequest;
use async_trait::async_trait;
use serde_json::Value;

/// REST client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    /// Create a client for the given base URL, e.g. `http://localhost:5001/api`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Self::with_http_client(http, base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if let Err(e) = reqwest::Url::parse(&base_url) {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a request path onto the base URL
    fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform the request, keeping the concrete error type
    pub async fn send(&self, request: &HttpRequest) -> Result<Value, ClientError> {
        let url = self.url_for(&request.path);
        log::debug!("ReqwestClient: {} {}", request.method, url);

        let mut builder = self.http.request(request.method.into(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            log::warn!("ReqwestClient: {} {} -> {}", request.method, url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(decode_body(&bytes))
    }
}

/// Decode a 2xx body
///
/// Empty bodies become `null`. A body that is not JSON is handed back as a
/// string, untouched.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        log::debug!("ReqwestClient: body is not JSON ({}), keeping it as text", e);
        Value::String(String::from_utf8_lossy(bytes).into_owned())
    })
}

#[async_trait]
impl RestClient for ReqwestClient {
    async fn request(&self, request: &HttpRequest) -> anyhow::Result<Value> {
        Ok(self.send(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_single_slash() {
        let client = ReqwestClient::new("http://localhost:5001/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001/api");
        assert_eq!(client.url_for("/tasks"), "http://localhost:5001/api/tasks");
        assert_eq!(client.url_for("tasks/2"), "http://localhost:5001/api/tasks/2");
        assert_eq!(client.url_for(""), "http://localhost:5001/api");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b""), Value::Null);
        assert_eq!(decode_body(b" \n"), Value::Null);
        assert_eq!(decode_body(br#"{"id":1}"#), serde_json::json!({ "id": 1 }));
        assert_eq!(decode_body(b"OK"), Value::String("OK".to_string()));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ReqwestClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }
}
