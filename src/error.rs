//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur while building a reply parser
///
/// Parsing a body never fails; these only surface when compiling patterns
/// for a custom [`ParserConfig`](crate::ParserConfig).
#[derive(Error, Debug)]
pub enum ReplyParseError {
    /// A generated pattern failed to compile
    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid configuration value
    #[error("Invalid parser configuration: {0}")]
    Config(String),

    /// Configuration could not be deserialized
    #[error("Failed to read configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// Encoded sender header could not be decoded
    #[error("Failed to decode sender header: {0}")]
    Header(#[from] mailparse::MailParseError),
}

/// Result type for reply parsing operations
pub type Result<T> = std::result::Result<T, ReplyParseError>;
