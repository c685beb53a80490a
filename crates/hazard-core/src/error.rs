//! Error types for collaborator calls.

use thiserror::Error;

/// Errors that can occur while synthesizing an alert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// The synthesizer is temporarily unavailable.
    #[error("synthesizer unavailable: {0}")]
    Unavailable(String),

    /// The request could not be processed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The synthesizer is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport failure talking to a remote backend.
    #[error("network error: {0}")]
    Network(String),

    /// The returned assessment does not satisfy the response contract.
    #[error("invalid assessment: {0}")]
    InvalidResponse(String),

    /// A timeout occurred during processing.
    #[error("synthesis timed out")]
    Timeout,
}

/// Errors that can occur while fetching a hazard record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// The source could not be reached or produced no record.
    #[error("feed unavailable: {0}")]
    Unavailable(String),

    /// HTTP transport failure.
    #[error("http error: {0}")]
    Http(String),

    /// The source answered with a non-success status.
    #[error("feed returned status {0}")]
    Status(u16),

    /// The record was malformed or incomplete.
    #[error("malformed record: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}
