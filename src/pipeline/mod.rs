// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
pub mod progress;
mod query;

pub use orchestrator::{PipelineOutcome, RagPipeline};
pub use progress::{LoadStats, LoadTracker};
pub use query::{QUERY_PROMPT, read_query, resolve_query};
