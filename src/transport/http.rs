// file: src/transport/http.rs
// description: reqwest-backed implementation of the HTTP transport
// reference: https://docs.rs/reqwest

use super::{HttpResponse, HttpTransport};
use crate::error::{RagError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Without a timeout a request waits as long as the peer keeps the
    /// connection open.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| RagError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<HttpResponse> {
        let response = request.send().await.map_err(|e| RagError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| RagError::Transport {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;

        debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse::new(status, body))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        debug!("POST {}", url);
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body);
        self.send(url, request).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("GET {}", url);
        self.send(url, self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_with_and_without_timeout() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(Duration::from_secs(2))).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_peer_is_transport_error() {
        let transport = ReqwestTransport::new(Some(Duration::from_secs(2))).unwrap();
        // port 9 (discard) on loopback is closed in test environments
        let err = transport
            .post_json("http://127.0.0.1:9/documents/_search", &json!({}))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
