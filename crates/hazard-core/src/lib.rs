//! Core types and traits for the Siaga Bogor nearby-alert engine.
//!
//! This crate holds everything the alert check needs that does not touch
//! the network:
//!
//! - [`GeoPoint`] / [`distance_km`] - Haversine great-circle distance
//! - Hazard records ([`HazardSnapshot`]) with language-independent status enums
//! - [`enrich`] - Per-hazard risk predicates producing [`EnrichedDisaster`] entries
//! - [`AlertSynthesisRequest`] / [`AlertAssessment`] - The synthesis contract
//! - [`AlertSynthesizer`] - The trait every alert writer implements
//! - [`HazardFeed`] - The trait every hazard data source implements
//!
//! # Example
//!
//! ```rust
//! use hazard_core::{
//!     async_trait, AlertAssessment, AlertSynthesisRequest, AlertSynthesizer, SynthesisError,
//! };
//!
//! struct AlwaysSafe;
//!
//! #[async_trait]
//! impl AlertSynthesizer for AlwaysSafe {
//!     async fn synthesize(
//!         &self,
//!         _request: &AlertSynthesisRequest,
//!     ) -> Result<AlertAssessment, SynthesisError> {
//!         Ok(AlertAssessment::not_at_risk())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "AlwaysSafe"
//!     }
//! }
//! ```

mod assessment;
mod enrich;
mod error;
mod feed;
mod geo;
mod hazard;
pub mod prompt;
mod synthesizer;

pub use assessment::{
    build_request, AlertAssessment, AlertSynthesisRequest, Language, MIN_RECOMMENDATIONS,
};
pub use enrich::{
    enrich, enrich_earthquake, enrich_fire, enrich_flood, enrich_landslide, enrich_volcano,
    enrich_whirlwind, EnrichedDisaster, DEFAULT_UNSAFE_RADIUS_KM,
    EARTHQUAKE_MAGNITUDE_THRESHOLD,
};
pub use error::{FeedError, SynthesisError};
pub use feed::{HazardFeed, HazardFeeds};
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use hazard::{
    EarthquakeReport, FireReport, FireStatus, FloodReport, FloodStatus, HazardKind,
    HazardSnapshot, LandslideReport, RiskLevel, UnknownStatus, VolcanoLevel, VolcanoReport,
    WhirlwindReport,
};
pub use prompt::{hash_prompt, DEFAULT_ALERT_SYSTEM_PROMPT};
pub use synthesizer::AlertSynthesizer;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
