// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RagError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
    pub model_server: ModelServerConfig,
    pub loader: LoaderConfig,
    pub exporter: ExporterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub index: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelServerConfig {
    pub endpoint: String,
    pub model_name: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExporterConfig {
    pub output_dir: PathBuf,
    pub input_width: usize,
    pub units: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl ModelServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_documents() -> Vec<String> {
    vec![
        "This is a sample document for testing purposes.".to_string(),
        "Another document to showcase retrieval capabalities.".to_string(),
    ]
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| RagError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ES_RAG")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RagError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RagError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            search: SearchConfig {
                endpoint: "http://localhost:9200".to_string(),
                index: "documents".to_string(),
                timeout_secs: None,
            },
            model_server: ModelServerConfig {
                endpoint: "http://localhost:8501".to_string(),
                model_name: "model".to_string(),
                timeout_secs: None,
            },
            loader: LoaderConfig {
                documents: default_documents(),
            },
            exporter: ExporterConfig {
                output_dir: PathBuf::from("model"),
                input_width: 10,
                units: 10,
                seed: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.search.endpoint)
            .map_err(|e| RagError::Config(format!("search.endpoint: {}", e)))?;
        Validator::validate_url(&self.model_server.endpoint)
            .map_err(|e| RagError::Config(format!("model_server.endpoint: {}", e)))?;
        Validator::validate_index_name(&self.search.index)
            .map_err(|e| RagError::Config(format!("search.index: {}", e)))?;

        if self.model_server.model_name.trim().is_empty() {
            return Err(RagError::Config(
                "model_server.model_name must not be empty".to_string(),
            ));
        }

        if self.exporter.input_width == 0 || self.exporter.units == 0 {
            return Err(RagError::Config(
                "exporter.input_width and exporter.units must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.index, "documents");
        assert_eq!(config.loader.documents.len(), 2);
        assert!(config.search.timeout().is_none());
    }

    #[test]
    fn test_load_overrides_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("es_rag.toml");
        fs::write(
            &path,
            r#"
[search]
endpoint = "http://search.internal:9200"
index = "articles"
timeout_secs = 5

[model_server]
endpoint = "http://models.internal:8501"
model_name = "answerer"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.search.endpoint, "http://search.internal:9200");
        assert_eq!(config.search.index, "articles");
        assert_eq!(config.search.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.model_server.model_name, "answerer");
        // untouched sections keep their defaults
        assert_eq!(config.exporter.input_width, 10);
        assert_eq!(config.loader.documents.len(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default_config();
        config.model_server.endpoint = "localhost:8501".to_string();
        assert!(matches!(config.validate(), Err(RagError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = Config::default_config();
        config.exporter.units = 0;
        assert!(config.validate().is_err());
    }
}
