// file: src/search/retriever.rs
// description: top-hit text retrieval for a free-text query

use crate::error::Result;
use crate::models::Retrieval;
use crate::search::SearchClient;
use tracing::{debug, info};

/// Field every indexed document carries.
pub const TEXT_FIELD: &str = "text";

#[derive(Clone)]
pub struct Retriever {
    client: SearchClient,
}

impl Retriever {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }

    /// Returns the engine's top-ranked hit, or `Retrieval::NotFound` when
    /// nothing matched. Transport failures, error statuses and undecodable
    /// responses are errors, not sentinels. A blank query matches nothing.
    pub async fn retrieve(&self, query: &str) -> Result<Retrieval> {
        if query.trim().is_empty() {
            info!("Blank query, nothing to match");
            return Ok(Retrieval::NotFound);
        }

        let response = self.client.match_search(TEXT_FIELD, query).await?;
        debug!("Search reported {:?} total hits", response.total());

        match response.top_hit(TEXT_FIELD)? {
            Some(hit) => {
                info!("Retrieved document {} from {}", hit.id, self.client.index());
                Ok(Retrieval::Found(hit))
            }
            None => {
                info!("No documents matched query");
                Ok(Retrieval::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::RagError;
    use crate::models::NO_RELEVANT_TEXT;
    use crate::transport::fake::FakeTransport;
    use std::sync::Arc;

    fn retriever(transport: FakeTransport) -> (Retriever, Arc<FakeTransport>) {
        let transport = Arc::new(transport);
        let client = SearchClient::new(Config::default_config().search, transport.clone());
        (Retriever::new(client), transport)
    }

    #[tokio::test]
    async fn test_verbatim_match_returns_text_exactly() {
        let (retriever, _) = retriever(FakeTransport::new().respond(
            "/documents/_search",
            200,
            r#"{"hits":{"total":{"value":1,"relation":"eq"},"hits":[
                {"_id":"1","_score":1.3,"_source":{"text":"This is a sample document for testing purposes."}}
            ]}}"#,
        ));

        let retrieval = retriever.retrieve("sample document").await.unwrap();
        match retrieval {
            Retrieval::Found(hit) => {
                assert_eq!(hit.id, "1");
                assert_eq!(hit.text, "This is a sample document for testing purposes.");
            }
            Retrieval::NotFound => panic!("expected a hit"),
        }
    }

    #[tokio::test]
    async fn test_no_match_returns_sentinel() {
        let (retriever, _) = retriever(FakeTransport::new().respond(
            "/_search",
            200,
            r#"{"hits":{"total":{"value":0,"relation":"eq"},"hits":[]}}"#,
        ));

        let retrieval = retriever.retrieve("zebra migration").await.unwrap();
        assert_eq!(retrieval, Retrieval::NotFound);
        assert_eq!(retrieval.to_string(), NO_RELEVANT_TEXT);
    }

    #[tokio::test]
    async fn test_transport_failure_is_distinct_from_not_found() {
        let (retriever, _) =
            retriever(FakeTransport::new().fail("/_search", "connection refused"));

        let err = retriever.retrieve("sample").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let (retriever, _) =
            retriever(FakeTransport::new().respond("/_search", 200, r#"{"took": 1}"#));

        let err = retriever.retrieve("sample").await.unwrap_err();
        assert!(matches!(err, RagError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_blank_query_is_not_found() {
        let (retriever, transport) = retriever(FakeTransport::new());

        for query in ["", "   \t"] {
            let retrieval = retriever.retrieve(query).await.unwrap();
            assert_eq!(retrieval.to_string(), NO_RELEVANT_TEXT);
        }
        assert!(transport.requests().is_empty());
    }
}
