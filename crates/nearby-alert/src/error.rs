//! Error types for alert checks.

use hazard_core::{HazardKind, SynthesisError};
use thiserror::Error;

/// Errors that can occur during an alert check.
#[derive(Debug, Error)]
pub enum AlertCheckError {
    /// The caller supplied an unusable request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A hazard feed returned an error.
    #[error("{kind} feed failed: {reason}")]
    FeedFailed { kind: HazardKind, reason: String },

    /// A hazard feed did not answer in time.
    #[error("{0} feed timed out")]
    FeedTimeout(HazardKind),

    /// The synthesizer failed or broke the response contract.
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    /// The synthesizer did not answer in time.
    #[error("synthesis timed out")]
    SynthesisTimeout,

    /// The checker is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AlertCheckError {
    /// Whether the failure is the caller's fault rather than a service failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AlertCheckError::InvalidInput(_))
    }
}
