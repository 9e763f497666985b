// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod model_server;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod transport;
pub mod utils;

pub use config::{Config, ExporterConfig, LoaderConfig, ModelServerConfig, SearchConfig};
pub use error::{RagError, Result};
pub use exporter::{DenseLayer, DenseModel, ExportManifest, ModelExporter};
pub use model_server::Responder;
pub use models::{
    Answer, Document, IndexedDocument, NO_RELEVANT_TEXT, NO_RESPONSE_TEXT, Prompt, Retrieval,
    SearchHit,
};
pub use pipeline::{LoadStats, LoadTracker, PipelineOutcome, RagPipeline};
pub use search::{DocumentLoader, LoadReport, Retriever, SearchClient};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(NO_RELEVANT_TEXT, "No relevant text found.");
    }
}
