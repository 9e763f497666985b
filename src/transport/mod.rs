// file: src/transport/mod.rs
// description: HTTP transport seam shared by the search and model server clients
// reference: internal module structure

mod http;

#[cfg(test)]
pub mod fake;

pub use http::ReqwestTransport;

use crate::error::{RagError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and raw body of a completed HTTP exchange. Non-2xx statuses are
/// returned as responses, not errors; callers decide what they mean.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self, service: &'static str) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| RagError::malformed(service, e.to_string()))
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` as `application/json` to `url`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse>;

    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
