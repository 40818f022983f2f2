//! Error types for email analysis

use thiserror::Error;

/// Errors that can occur while analyzing an email
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The raw bytes could not be parsed as an RFC822 message at all
    #[error("Failed to parse message structure: {0}")]
    MalformedMessage(String),
}

/// Result type for email analysis operations
pub type Result<T> = std::result::Result<T, AnalyzeError>;
