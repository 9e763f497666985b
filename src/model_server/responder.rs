// file: src/model_server/responder.rs
// description: prediction requests against a TensorFlow-Serving style REST endpoint
// reference: https://www.tensorflow.org/tfx/serving/api_rest#predict_api

use crate::config::ModelServerConfig;
use crate::error::{RagError, Result};
use crate::models::Answer;
use crate::transport::{HttpResponse, HttpTransport};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const SERVICE: &str = "model server";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Instance<'a> {
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Value>,
}

#[derive(Clone)]
pub struct Responder {
    transport: Arc<dyn HttpTransport>,
    config: ModelServerConfig,
}

impl Responder {
    pub fn new(config: ModelServerConfig, transport: Arc<dyn HttpTransport>) -> Self {
        info!(
            "Using model server at {} (model: {})",
            config.endpoint, config.model_name
        );
        Self { transport, config }
    }

    fn model_url(&self) -> String {
        format!(
            "{}/v1/models/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model_name
        )
    }

    pub fn predict_url(&self) -> String {
        format!("{}:predict", self.model_url())
    }

    /// Send `prompt` as a one-instance batch. Only a 200 counts as an answer;
    /// any other status becomes `RagError::Status` carrying the raw body.
    pub async fn respond(&self, prompt: &str) -> Result<Answer> {
        let url = self.predict_url();
        let request = PredictRequest {
            instances: [Instance { input: prompt }],
        };
        let body = serde_json::to_value(&request)?;

        debug!("Sending {} char prompt to {}", prompt.len(), url);
        let response = self.transport.post_json(&url, &body).await?;

        if response.status != 200 {
            return Err(RagError::Status {
                service: SERVICE,
                status: response.status,
                body: response.body,
            });
        }

        let parsed: PredictResponse = response.json(SERVICE)?;
        let answer = parsed
            .predictions
            .first()
            .and_then(|prediction| prediction.get("text"))
            .and_then(Value::as_str)
            .map(|text| Answer::Text(text.to_string()))
            .unwrap_or(Answer::Empty);

        Ok(answer)
    }

    /// Model status endpoint; 2xx means the model is loaded.
    pub async fn status(&self) -> Result<HttpResponse> {
        self.transport.get(&self.model_url()).await
    }
}
