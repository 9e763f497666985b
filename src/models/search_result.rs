// file: src/models/search_result.rs
// description: retrieval outcome and the top search hit
// reference: Used for match query results

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_RELEVANT_TEXT: &str = "No relevant text found.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document ID assigned by the search engine
    pub id: String,

    /// The document's `text` field
    pub text: String,

    /// Relevance score, when the engine reports one
    pub score: Option<f32>,
}

/// Result of a retrieval: either the top-ranked hit or nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub enum Retrieval {
    Found(SearchHit),
    NotFound,
}

impl fmt::Display for Retrieval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(hit) => f.write_str(&hit.text),
            Self::NotFound => f.write_str(NO_RELEVANT_TEXT),
        }
    }
}
