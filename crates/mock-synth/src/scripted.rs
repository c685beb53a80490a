//! Scripted synthesizer - returns a preset result.

use std::sync::atomic::{AtomicUsize, Ordering};

use hazard_core::{
    async_trait, AlertAssessment, AlertSynthesisRequest, AlertSynthesizer, SynthesisError,
};
use tokio::sync::Mutex;

/// A synthesizer that always answers with the same result.
///
/// Lets tests drive the alert check down paths a well-behaved synthesizer
/// never takes: malformed assessments, backend failures, and so on. The last
/// request received is kept for inspection.
pub struct ScriptedSynthesizer {
    result: Result<AlertAssessment, SynthesisError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<AlertSynthesisRequest>>,
}

impl ScriptedSynthesizer {
    /// Always return the given assessment.
    pub fn returning(assessment: AlertAssessment) -> Self {
        Self::with_result(Ok(assessment))
    }

    /// Always fail with the given error.
    pub fn failing(error: SynthesisError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<AlertAssessment, SynthesisError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of times `synthesize` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<AlertSynthesisRequest> {
        self.last_request.lock().await.clone()
    }
}

#[async_trait]
impl AlertSynthesizer for ScriptedSynthesizer {
    async fn synthesize(
        &self,
        request: &AlertSynthesisRequest,
    ) -> Result<AlertAssessment, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().await = Some(request.clone());
        self.result.clone()
    }

    fn name(&self) -> &str {
        "ScriptedSynthesizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_core::{build_request, GeoPoint, Language};

    fn request() -> AlertSynthesisRequest {
        build_request(GeoPoint::new(-6.6, 106.8), Language::Indonesian, Vec::new())
    }

    #[tokio::test]
    async fn test_returning() {
        let synth = ScriptedSynthesizer::returning(AlertAssessment::not_at_risk());

        let assessment = synth.synthesize(&request()).await.unwrap();
        assert!(!assessment.is_at_risk);
        assert_eq!(synth.calls(), 1);

        let seen = synth.last_request().await.unwrap();
        assert_eq!(seen.language, Language::Indonesian);
    }

    #[tokio::test]
    async fn test_failing() {
        let synth = ScriptedSynthesizer::failing(SynthesisError::Timeout);

        let result = synth.synthesize(&request()).await;
        assert!(matches!(result, Err(SynthesisError::Timeout)));
        assert_eq!(synth.calls(), 1);
    }
}
