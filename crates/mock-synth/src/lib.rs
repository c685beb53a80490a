//! Deterministic alert synthesizers.
//!
//! This crate provides implementations of the `AlertSynthesizer` trait that
//! do not call a language model:
//! - `RuleBasedSynthesizer` - Picks a hazard by fixed priority and writes canned text
//! - `ScriptedSynthesizer` - Returns a preset result, for exercising error paths
//! - `DelayedSynthesizer` - Wraps another synthesizer with artificial delay
//!
//! For model-written alerts, use the `grok-synth` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_synth::{build_request, AlertSynthesizer, GeoPoint, Language, RuleBasedSynthesizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_synth::SynthesisError> {
//!     let synth = RuleBasedSynthesizer::new();
//!     let request = build_request(GeoPoint::new(-6.595, 106.816), Language::English, Vec::new());
//!
//!     let assessment = synth.synthesize(&request).await?;
//!     assert!(!assessment.is_at_risk);
//!     Ok(())
//! }
//! ```

mod delayed;
mod rules;
mod scripted;

// Re-export hazard-core types for convenience
pub use hazard_core::{
    async_trait, build_request, AlertAssessment, AlertSynthesisRequest, AlertSynthesizer,
    GeoPoint, Language, SynthesisError,
};

pub use delayed::DelayedSynthesizer;
pub use rules::{RuleBasedSynthesizer, PRIORITY};
pub use scripted::ScriptedSynthesizer;
