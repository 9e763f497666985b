// file: src/exporter/artifact.rs
// description: writes and reads the model artifact directory
// reference: saved-model style layout with a variables subdirectory

use crate::error::{RagError, Result};
use crate::exporter::dense::{DenseLayer, DenseModel};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const FORMAT: &str = "es_rag.dense/v1";
pub const MODEL_FILE: &str = "saved_model.json";
pub const VARIABLES_DIR: &str = "variables";
pub const VARIABLES_FILE: &str = "variables.json";
pub const FINGERPRINT_FILE: &str = "fingerprint.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerSpec {
    pub name: String,
    pub class_name: String,
    pub units: usize,
    pub activation: String,
    pub use_bias: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputSignature {
    /// Leading `None` is the batch dimension.
    pub shape: [Option<usize>; 2],
    pub dtype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedModel {
    pub format: String,
    pub class_name: String,
    pub layers: Vec<LayerSpec>,
    pub input_signature: InputSignature,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fingerprint {
    pub variables_sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub fingerprint: String,
}

#[derive(Debug, Clone)]
pub struct ModelExporter {
    output_dir: PathBuf,
}

impl ModelExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the artifact, replacing whatever the output directory held.
    pub fn export(&self, model: &DenseModel) -> Result<ExportManifest> {
        if self.output_dir.exists() {
            warn!(
                "Overwriting existing model artifact at {}",
                self.output_dir.display()
            );
            fs::remove_dir_all(&self.output_dir)?;
        }

        let variables_dir = self.output_dir.join(VARIABLES_DIR);
        fs::create_dir_all(&variables_dir)?;

        let saved_model = describe(&model.dense);
        let model_path = self.output_dir.join(MODEL_FILE);
        fs::write(&model_path, serde_json::to_string_pretty(&saved_model)?)?;

        let variables = serde_json::to_vec(&model.dense)?;
        let variables_path = variables_dir.join(VARIABLES_FILE);
        fs::write(&variables_path, &variables)?;

        let fingerprint = Fingerprint {
            variables_sha256: compute_hash(&variables),
        };
        let fingerprint_path = self.output_dir.join(FINGERPRINT_FILE);
        fs::write(&fingerprint_path, serde_json::to_string_pretty(&fingerprint)?)?;

        info!(
            "Exported dense model ({} -> {}) to {}",
            model.dense.input_width(),
            model.dense.units(),
            self.output_dir.display()
        );

        Ok(ExportManifest {
            output_dir: self.output_dir.clone(),
            files: vec![model_path, variables_path, fingerprint_path],
            fingerprint: fingerprint.variables_sha256,
        })
    }

    pub fn load(dir: &Path) -> Result<DenseModel> {
        let saved_model: SavedModel =
            serde_json::from_str(&fs::read_to_string(dir.join(MODEL_FILE))?)?;
        if saved_model.format != FORMAT {
            return Err(RagError::Validation(format!(
                "Unsupported model format: {}",
                saved_model.format
            )));
        }

        let variables = fs::read(dir.join(VARIABLES_DIR).join(VARIABLES_FILE))?;
        let fingerprint: Fingerprint =
            serde_json::from_str(&fs::read_to_string(dir.join(FINGERPRINT_FILE))?)?;
        if compute_hash(&variables) != fingerprint.variables_sha256 {
            return Err(RagError::Validation(
                "Model variables do not match fingerprint".to_string(),
            ));
        }

        let dense: DenseLayer = serde_json::from_slice(&variables)?;
        if saved_model != describe(&dense) {
            return Err(RagError::Validation(
                "Model variables do not match the saved architecture".to_string(),
            ));
        }

        Ok(DenseModel { dense })
    }
}

fn describe(dense: &DenseLayer) -> SavedModel {
    SavedModel {
        format: FORMAT.to_string(),
        class_name: "SimpleModel".to_string(),
        layers: vec![LayerSpec {
            name: "dense".to_string(),
            class_name: "Dense".to_string(),
            units: dense.units(),
            activation: "linear".to_string(),
            use_bias: true,
        }],
        input_signature: InputSignature {
            shape: [None, Some(dense.input_width())],
            dtype: "float32".to_string(),
        },
    }
}

fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
