// file: src/search/response.rs
// description: wire shapes of the search engine's index and search responses
// reference: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-search.html

use crate::error::{RagError, Result};
use crate::models::SearchHit;
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "search";

#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// Older engines report the total as a bare number, newer ones as an object.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TotalHits {
    Count(u64),
    Object { value: u64 },
}

#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f32>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match self {
            Self::Count(value) | Self::Object { value } => *value,
        }
    }
}

impl SearchResponse {
    pub fn total(&self) -> Option<u64> {
        self.hits.total.as_ref().map(TotalHits::value)
    }

    /// First hit as ranked by the engine, with `field` read from `_source`.
    pub fn top_hit(&self, field: &str) -> Result<Option<SearchHit>> {
        self.hits
            .hits
            .first()
            .map(|hit| hit.to_search_hit(field))
            .transpose()
    }
}

impl RawHit {
    fn to_search_hit(&self, field: &str) -> Result<SearchHit> {
        let text = self
            .source
            .as_ref()
            .and_then(|source| source.get(field))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RagError::malformed(
                    SERVICE,
                    format!("hit {} has no string _source.{}", self.id, field),
                )
            })?;

        Ok(SearchHit {
            id: self.id.clone(),
            text: text.to_string(),
            score: self.score,
        })
    }
}
