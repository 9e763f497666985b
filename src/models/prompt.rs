// file: src/models/prompt.rs
// description: prompt composed from retrieved context and the user query

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt(String);

impl Prompt {
    pub fn compose(context: &str, query: &str) -> Self {
        Self(format!("Context: {}\n\nQuery: {}\nAnswer:", context, query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_exact_layout() {
        let prompt = Prompt::compose(
            "This is a sample document for testing purposes.",
            "sample document",
        );
        assert_eq!(
            prompt.as_str(),
            "Context: This is a sample document for testing purposes.\n\nQuery: sample document\nAnswer:"
        );
    }

    #[test]
    fn test_compose_keeps_inputs_verbatim() {
        let prompt = Prompt::compose("  padded\ncontext ", "what?");
        assert_eq!(prompt.to_string(), "Context:   padded\ncontext \n\nQuery: what?\nAnswer:");
    }
}
