//! JSON error diagnostics and lenient field decoding for backup import

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Deserialize a field, falling back to its default on shape mismatch
///
/// Backups are applied without entity-shape validation: an unknown enum tag
/// or wrong-typed field costs only that field, never the whole file. Only
/// malformed JSON itself is a hard error.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// JSON syntax error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("invalid backup file")]
#[diagnostic(code(quill::json::syntax))]
pub struct JsonSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying error message
    message: String,
}

impl JsonSyntaxError {
    /// Create a syntax error from a serde_json error
    pub fn from_serde_error(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;

    for (i, ch) in source.char_indices() {
        if current_line == line {
            return i + column.saturating_sub(1);
        }
        if ch == '\n' {
            current_line += 1;
        }
    }

    source.len().saturating_sub(1)
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("trailing comma") {
        return Some("JSON does not allow a comma after the last element.".to_string());
    }

    if msg_lower.contains("expected `,` or `}`") || msg_lower.contains("expected `,` or `]`") {
        return Some("Check for a missing comma or an unclosed bracket.".to_string());
    }

    if msg_lower.contains("key must be a string") {
        return Some("JSON object keys must be double-quoted strings.".to_string());
    }

    if msg_lower.contains("eof") {
        return Some("The file ends mid-value; it may be truncated.".to_string());
    }

    None
}
