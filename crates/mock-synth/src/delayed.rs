//! Delayed synthesizer - wraps another synthesizer with artificial delay.

use std::time::Duration;

use hazard_core::{
    async_trait, AlertAssessment, AlertSynthesisRequest, AlertSynthesizer, SynthesisError,
};
use tokio::time::sleep;

/// A synthesizer that wraps another synthesizer and adds artificial delay.
///
/// Useful for testing timeout handling and simulating model latency.
pub struct DelayedSynthesizer<S: AlertSynthesizer> {
    inner: S,
    delay: Duration,
}

impl<S: AlertSynthesizer> DelayedSynthesizer<S> {
    /// Create a new DelayedSynthesizer wrapping the given synthesizer.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a synthesizer with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a synthesizer with a delay in seconds.
    pub fn with_secs(inner: S, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<S: AlertSynthesizer> AlertSynthesizer for DelayedSynthesizer<S> {
    async fn synthesize(
        &self,
        request: &AlertSynthesisRequest,
    ) -> Result<AlertAssessment, SynthesisError> {
        sleep(self.delay).await;
        self.inner.synthesize(request).await
    }

    fn name(&self) -> &str {
        "DelayedSynthesizer"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleBasedSynthesizer;
    use hazard_core::{build_request, GeoPoint, Language};
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_synthesizer() {
        let synth = DelayedSynthesizer::with_millis(RuleBasedSynthesizer::new(), 100);
        let request = build_request(GeoPoint::new(-6.6, 106.8), Language::English, Vec::new());

        let start = Instant::now();
        let assessment = synth.synthesize(&request).await.unwrap();
        let elapsed = start.elapsed();

        assert!(!assessment.is_at_risk);
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_synthesizer_name() {
        let synth = DelayedSynthesizer::with_millis(RuleBasedSynthesizer::new(), 0);
        assert_eq!(synth.name(), "DelayedSynthesizer");
        assert!(synth.is_ready().await);
    }
}
