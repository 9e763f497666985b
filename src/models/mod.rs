// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod document;
pub mod prompt;
pub mod search_result;

pub use answer::{Answer, NO_RESPONSE_TEXT};
pub use document::{Document, IndexedDocument};
pub use prompt::Prompt;
pub use search_result::{NO_RELEVANT_TEXT, Retrieval, SearchHit};
