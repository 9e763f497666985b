// file: src/models/answer.rs
// description: generated answer returned by the model server

use std::fmt;

pub const NO_RESPONSE_TEXT: &str = "No response text found.";

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    /// 200 response without a text in the first prediction.
    Empty,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Empty => f.write_str(NO_RESPONSE_TEXT),
        }
    }
}
