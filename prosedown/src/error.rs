//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The Markdown adapter rejected its input.
    ///
    /// The comrak front end accepts every string, so this variant marks the
    /// adapter boundary contract rather than a path reachable from text
    /// input. Callers that do hit a parse failure (e.g. malformed document
    /// JSON) are expected to substitute an empty document and continue.
    Parse(String),
    /// Error while printing a Markdown tree back to text
    Print(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::Print(msg) => write!(f, "Print error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
