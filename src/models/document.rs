// file: src/models/document.rs
// description: indexable document model and loading from json files
// reference: internal data structures

use crate::error::{RagError, Result};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
}

/// Outcome of submitting one document to the index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDocument {
    /// Server-assigned identifier; absent when the response carried no `_id`.
    pub id: Option<String>,
    pub status: u16,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(Self::new).collect()
    }

    /// Reads documents from a file holding either a JSON array of
    /// `{"text": ...}` objects or one such object per line.
    pub fn load_file(path: &Path) -> Result<Vec<Self>> {
        Validator::validate_file_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Vec<Self>> {
        let trimmed = content.trim_start();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        if trimmed.starts_with('[') {
            return Ok(serde_json::from_str(trimmed)?);
        }

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| {
                    RagError::Validation(format!("Invalid document on line {}: {}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl IndexedDocument {
    pub fn accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn id_or_placeholder(&self) -> &str {
        self.id.as_deref().unwrap_or("<none>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_document_serializes_as_text_object() {
        let doc = Document::new("This is a sample document for testing purposes.");
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"{"text":"This is a sample document for testing purposes."}"#
        );
    }

    #[test]
    fn test_parse_json_array() {
        let docs = Document::parse(r#"[{"text": "one"}, {"text": "two"}]"#).unwrap();
        assert_eq!(docs, Document::from_texts(["one", "two"]));
    }

    #[test]
    fn test_parse_json_lines() {
        let docs = Document::parse("{\"text\": \"one\"}\n\n{\"text\": \"two\"}\n").unwrap();
        assert_eq!(docs, Document::from_texts(["one", "two"]));
    }

    #[test]
    fn test_parse_rejects_missing_text() {
        let err = Document::parse("{\"text\": \"one\"}\n{\"body\": \"two\"}").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs.jsonl");
        fs::write(&path, "{\"text\": \"from disk\"}\n").unwrap();

        let docs = Document::load_file(&path).unwrap();
        assert_eq!(docs, vec![Document::new("from disk")]);
    }

    #[test]
    fn test_indexed_document_accepted() {
        let created = IndexedDocument {
            id: Some("x1".to_string()),
            status: 201,
        };
        let rejected = IndexedDocument {
            id: None,
            status: 400,
        };
        assert!(created.accepted());
        assert!(!rejected.accepted());
        assert_eq!(rejected.id_or_placeholder(), "<none>");
    }
}
