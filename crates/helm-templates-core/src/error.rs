//! Parse error types

use thiserror::Error;

/// Errors raised while interpreting helm output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Malformed table output at line {line}: {message}")]
    Table { line: usize, message: String },

    #[error("Unexpected output shape: expected {expected}, got {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
