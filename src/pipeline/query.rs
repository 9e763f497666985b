// file: src/pipeline/query.rs
// description: query acquisition from a command-line flag or interactive input

use crate::error::{RagError, Result};
use std::io::{self, BufRead, Write};

pub const QUERY_PROMPT: &str = "Enter your query Here: ";

/// Prompt on `output` and read one line from `input`.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", QUERY_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(RagError::Validation(
            "No query provided (input closed)".to_string(),
        ));
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// The flag wins; without it the user is asked on the terminal.
pub fn resolve_query(flag: Option<String>) -> Result<String> {
    match flag {
        Some(query) => Ok(query),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            read_query(&mut input, &mut io::stdout())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_query_prompts_and_strips_newline() {
        let mut input = Cursor::new("sample document\r\n");
        let mut output = Vec::new();

        let query = read_query(&mut input, &mut output).unwrap();
        assert_eq!(query, "sample document");
        assert_eq!(String::from_utf8(output).unwrap(), QUERY_PROMPT);
    }

    #[test]
    fn test_read_query_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            read_query(&mut input, &mut output),
            Err(RagError::Validation(_))
        ));
    }

    #[test]
    fn test_read_query_blank_line_is_passed_through() {
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();
        assert_eq!(read_query(&mut input, &mut output).unwrap(), "   ");
    }

    #[test]
    fn test_flag_takes_precedence() {
        let query = resolve_query(Some("from flag".to_string())).unwrap();
        assert_eq!(query, "from flag");
        assert_eq!(resolve_query(Some(String::new())).unwrap(), "");
    }
}
