//! The AlertSynthesizer trait definition.

use async_trait::async_trait;

use crate::assessment::{AlertAssessment, AlertSynthesisRequest};
use crate::error::SynthesisError;

/// Turns enriched hazard facts into a user-facing alert.
///
/// Implementations range from a deterministic rule table to a remote
/// text-generation model. The synthesizer is the only component that picks
/// which flagged hazard to report. This trait is object-safe and can be
/// used with `Arc<dyn AlertSynthesizer>`.
#[async_trait]
pub trait AlertSynthesizer: Send + Sync {
    /// Produce an assessment for the given request.
    ///
    /// Callers validate the result with [`AlertAssessment::validate`];
    /// implementations should still avoid reporting unflagged hazards.
    async fn synthesize(
        &self,
        request: &AlertSynthesisRequest,
    ) -> Result<AlertAssessment, SynthesisError>;

    /// Get a human-readable name for this synthesizer.
    fn name(&self) -> &str;

    /// Check if the synthesizer is ready to accept requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
