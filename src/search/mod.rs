// file: src/search/mod.rs
// description: search engine operations module exports
// reference: internal module structure

pub mod client;
pub mod loader;
pub mod response;
pub mod retriever;

pub use client::SearchClient;
pub use loader::{DocumentLoader, LoadReport};
pub use response::{SearchResponse, TotalHits};
pub use retriever::Retriever;
