// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{RagError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RagError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Index names follow the search engine's rules: lowercase, no spaces,
    /// no path separators, and not starting with `_`, `-` or `+`.
    pub fn validate_index_name(index: &str) -> Result<()> {
        if index.is_empty() {
            return Err(RagError::Validation("Index name is empty".to_string()));
        }

        if index.starts_with(['_', '-', '+']) {
            return Err(RagError::Validation(format!(
                "Index name cannot start with '_', '-' or '+': {}",
                index
            )));
        }

        let invalid = index
            .chars()
            .any(|c| c.is_uppercase() || c.is_whitespace() || "/\\*?\"<>|,#:".contains(c));
        if invalid {
            return Err(RagError::Validation(format!(
                "Invalid index name: {}",
                index
            )));
        }

        Ok(())
    }

    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(RagError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }
        Ok(())
    }
}
