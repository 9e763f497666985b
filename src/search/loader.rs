// file: src/search/loader.rs
// description: submits documents to the search index one request at a time
// reference: sequential index creation, no retry or deduplication

use crate::error::Result;
use crate::models::{Document, IndexedDocument};
use crate::pipeline::progress::{LoadStats, LoadTracker};
use crate::search::SearchClient;
use std::io::Write;
use tracing::{debug, info, warn};

pub struct DocumentLoader<'a> {
    client: &'a SearchClient,
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub documents: Vec<IndexedDocument>,
    pub stats: LoadStats,
}

impl<'a> DocumentLoader<'a> {
    pub fn new(client: &'a SearchClient) -> Self {
        Self { client }
    }

    /// Submit every document as a new record, writing `Document ID:{id} -
    /// Status:{status}` to `out` as each response arrives. Rejected documents
    /// are counted and reported, never retried; a transport failure stops the
    /// load after the lines already written.
    pub async fn load<W: Write>(
        &self,
        documents: &[Document],
        tracker: &LoadTracker,
        out: &mut W,
    ) -> Result<LoadReport> {
        info!(
            "Loading {} documents into index {}",
            documents.len(),
            self.client.index()
        );

        let mut indexed = Vec::with_capacity(documents.len());

        for document in documents {
            let result = self.client.index_document(document).await?;
            tracker.record(result.status);

            writeln!(
                out,
                "Document ID:{} - Status:{}",
                result.id_or_placeholder(),
                result.status
            )?;

            if result.accepted() {
                debug!("Indexed document {}", result.id_or_placeholder());
            } else {
                warn!("Index rejected a document with status {}", result.status);
            }

            indexed.push(result);
        }

        tracker.finish();
        let stats = tracker.get_stats();
        info!(
            "Submitted {} documents ({} accepted, {} rejected, {:.1}%) in {}ms",
            stats.submitted,
            stats.accepted,
            stats.rejected,
            stats.acceptance_rate(),
            stats.duration_ms
        );

        Ok(LoadReport {
            documents: indexed,
            stats,
        })
    }
}
