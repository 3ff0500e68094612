//! Error types for meeting-resolver operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    /// A request duration or event range that cannot describe a span of the day.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// The schedule document was not valid JSON or did not match the expected shape.
    #[error("Schedule document error: {0}")]
    Document(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
