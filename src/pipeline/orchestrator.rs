// file: src/pipeline/orchestrator.rs
// description: retrieve-then-generate flow for a single query
// reference: coordinates the search engine and the model server

use crate::error::Result;
use crate::model_server::Responder;
use crate::models::{Answer, Prompt, Retrieval, SearchHit};
use crate::search::Retriever;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Nothing matched; the model server was not called.
    NoContext,
    Answered {
        context: SearchHit,
        prompt: Prompt,
        answer: Answer,
    },
}

pub struct RagPipeline {
    retriever: Retriever,
    responder: Responder,
}

impl RagPipeline {
    pub fn new(retriever: Retriever, responder: Responder) -> Self {
        Self {
            retriever,
            responder,
        }
    }

    /// Retrieve context for `query`, then ask the model server. Intermediate
    /// and final results are written to `out` as they become available.
    pub async fn run<W: Write>(&self, query: &str, out: &mut W) -> Result<PipelineOutcome> {
        info!("Answering query: {}", query);

        let retrieval = self.retriever.retrieve(query).await?;
        writeln!(out, "Retrieved text: {}", retrieval)?;

        let context = match retrieval {
            Retrieval::Found(hit) => hit,
            Retrieval::NotFound => return Ok(PipelineOutcome::NoContext),
        };

        let prompt = Prompt::compose(&context.text, query);
        let answer = self.responder.respond(prompt.as_str()).await?;
        writeln!(out, "Generated response: {}", answer)?;

        Ok(PipelineOutcome::Answered {
            context,
            prompt,
            answer,
        })
    }
}
