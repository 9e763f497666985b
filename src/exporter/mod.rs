// file: src/exporter/mod.rs
// description: model artifact export module exports
// reference: internal module structure

pub mod artifact;
pub mod dense;

pub use artifact::{ExportManifest, ModelExporter};
pub use dense::{DenseLayer, DenseModel};
