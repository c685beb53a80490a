//! Nearby-alert check for the Siaga Bogor engine.
//!
//! Combines a user's location with the latest hazard records, flags the
//! hazards that put the user at risk, and asks an [`AlertSynthesizer`] to
//! write a single validated alert.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nearby_alert::{AlertCheckConfig, AlertCheckRequest, AlertChecker, AlertOutcome};
//!
//! let checker = AlertChecker::new(feeds, Arc::new(synthesizer), AlertCheckConfig::from_env()?)?;
//! match checker.check(&AlertCheckRequest::new(location, Language::English)).await {
//!     AlertOutcome::Assessed(assessment) => println!("at risk: {}", assessment.is_at_risk),
//!     AlertOutcome::Rejected { reason } => eprintln!("bad request: {}", reason),
//!     AlertOutcome::Unavailable { reason } => eprintln!("no assessment available: {}", reason),
//! }
//! ```

mod cache;
mod checker;
mod config;
mod error;

pub use cache::{cache_feeds, CachedFeed};
pub use checker::{AlertCheckRequest, AlertChecker, AlertOutcome};
pub use config::{AlertCheckConfig, DEFAULT_FEED_TIMEOUT, DEFAULT_SYNTHESIS_TIMEOUT};
pub use error::AlertCheckError;

pub use hazard_core::{AlertAssessment, AlertSynthesizer, GeoPoint, HazardFeeds, Language};
