// file: src/search/client.rs
// description: search engine REST client bound to one index
// reference: https://www.elastic.co/guide/en/elasticsearch/reference/current/rest-apis.html

use crate::config::SearchConfig;
use crate::error::{RagError, Result};
use crate::models::{Document, IndexedDocument};
use crate::search::response::{IndexResponse, SearchResponse};
use crate::transport::{HttpResponse, HttpTransport};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SERVICE: &str = "search";

#[derive(Clone)]
pub struct SearchClient {
    transport: Arc<dyn HttpTransport>,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig, transport: Arc<dyn HttpTransport>) -> Self {
        info!("Using search engine at {} (index: {})", config.endpoint, config.index);
        Self { transport, config }
    }

    pub fn index(&self) -> &str {
        &self.config.index
    }

    fn base_url(&self) -> &str {
        self.config.endpoint.trim_end_matches('/')
    }

    fn index_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url(), self.config.index, path)
    }

    /// Create a new record; the engine assigns the identifier. The status is
    /// reported as-is, non-2xx included.
    pub async fn index_document(&self, document: &Document) -> Result<IndexedDocument> {
        let url = self.index_url("_doc/");
        let body = serde_json::to_value(document)?;

        let response = self.transport.post_json(&url, &body).await?;

        let id = match serde_json::from_str::<IndexResponse>(&response.body) {
            Ok(parsed) => parsed.id,
            Err(e) => {
                warn!("Index response from {} was not JSON: {}", url, e);
                None
            }
        };

        Ok(IndexedDocument {
            id,
            status: response.status,
        })
    }

    /// Run a `match` query against `field` and return the decoded response.
    pub async fn match_search(&self, field: &str, query: &str) -> Result<SearchResponse> {
        let url = self.index_url("_search");
        let mut clause = Map::new();
        clause.insert(field.to_string(), Value::String(query.to_string()));
        let body = json!({ "query": { "match": clause } });

        debug!("Match query on {}.{}: {}", self.config.index, field, query);

        let response = self.transport.post_json(&url, &body).await?;
        if !response.is_success() {
            return Err(RagError::Status {
                service: SERVICE,
                status: response.status,
                body: response.body,
            });
        }

        response.json(SERVICE)
    }

    pub async fn ping(&self) -> Result<HttpResponse> {
        let url = format!("{}/", self.base_url());
        self.transport.get(&url).await
    }
}
