//! The alert check itself.

use std::sync::Arc;
use std::time::{Duration, Instant};

use hazard_core::{
    build_request, enrich, AlertAssessment, AlertSynthesizer, GeoPoint, HazardFeed, HazardFeeds,
    HazardKind, HazardSnapshot, Language,
};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::cache::cache_feeds;
use crate::config::AlertCheckConfig;
use crate::error::AlertCheckError;

/// One nearby-alert question: is this location in danger right now?
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCheckRequest {
    pub user_location: GeoPoint,
    pub language: Language,
}

impl AlertCheckRequest {
    pub fn new(user_location: GeoPoint, language: Language) -> Self {
        Self {
            user_location,
            language,
        }
    }
}

/// Result of an alert check as seen by callers.
///
/// Every failure ends in `Rejected` or `Unavailable`. A failed check is
/// never reported as "not at risk".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AlertOutcome {
    /// A validated assessment, at risk or not.
    Assessed(AlertAssessment),
    /// The request itself was unusable.
    Rejected { reason: String },
    /// No assessment is available right now.
    Unavailable { reason: String },
}

impl From<Result<AlertAssessment, AlertCheckError>> for AlertOutcome {
    fn from(result: Result<AlertAssessment, AlertCheckError>) -> Self {
        match result {
            Ok(assessment) => AlertOutcome::Assessed(assessment),
            Err(e) if e.is_client_error() => AlertOutcome::Rejected {
                reason: e.to_string(),
            },
            Err(e) => AlertOutcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

/// Runs alert checks against a set of hazard feeds and a synthesizer.
///
/// A check:
/// - validates the user location
/// - fetches all six hazard records concurrently, each under the feed timeout
/// - enriches them against the unsafe radius
/// - asks the synthesizer for an assessment, under the synthesis timeout
/// - validates the assessment against the enriched facts
///
/// Any failure after input validation makes the whole check unavailable.
pub struct AlertChecker {
    feeds: HazardFeeds,
    synthesizer: Arc<dyn AlertSynthesizer>,
    config: AlertCheckConfig,
}

impl AlertChecker {
    /// Create a checker. Feeds are wrapped in a cache when the config asks for one.
    pub fn new(
        feeds: HazardFeeds,
        synthesizer: Arc<dyn AlertSynthesizer>,
        config: AlertCheckConfig,
    ) -> Result<Self, AlertCheckError> {
        config.validate()?;

        let feeds = match config.feed_cache_ttl {
            Some(ttl) => {
                info!(ttl_secs = ttl.as_secs(), "Feed cache enabled");
                cache_feeds(feeds, ttl)
            }
            None => feeds,
        };

        info!(
            synthesizer = synthesizer.name(),
            unsafe_radius_km = config.unsafe_radius_km,
            feed_timeout_ms = config.feed_timeout.as_millis() as u64,
            synthesis_timeout_secs = config.synthesis_timeout.as_secs(),
            "AlertChecker initialized"
        );

        Ok(Self {
            feeds,
            synthesizer,
            config,
        })
    }

    pub fn config(&self) -> &AlertCheckConfig {
        &self.config
    }

    pub fn synthesizer_name(&self) -> &str {
        self.synthesizer.name()
    }

    pub async fn synthesizer_ready(&self) -> bool {
        self.synthesizer.is_ready().await
    }

    /// Run a check, converting every failure into an outcome.
    pub async fn check(&self, request: &AlertCheckRequest) -> AlertOutcome {
        self.try_check(request).await.into()
    }

    /// Run a check, surfacing the failure cause.
    pub async fn try_check(
        &self,
        request: &AlertCheckRequest,
    ) -> Result<AlertAssessment, AlertCheckError> {
        let started = Instant::now();
        let user = request.user_location;

        user.validate().map_err(AlertCheckError::InvalidInput)?;

        let snapshot = self.fetch_snapshot().await?;
        let enriched = enrich(user, self.config.unsafe_radius_km, &snapshot);
        let synthesis_request = build_request(user, request.language, enriched);

        debug!(
            flagged = synthesis_request.high_risk().count(),
            language = %request.language,
            "Hazards enriched"
        );

        let assessment = match timeout(
            self.config.synthesis_timeout,
            self.synthesizer.synthesize(&synthesis_request),
        )
        .await
        {
            Ok(Ok(assessment)) => assessment,
            Ok(Err(e)) => {
                warn!(synthesizer = self.synthesizer.name(), error = %e, "Synthesis failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(synthesizer = self.synthesizer.name(), "Synthesis timed out");
                return Err(AlertCheckError::SynthesisTimeout);
            }
        };

        if let Err(e) = assessment.validate(&synthesis_request) {
            warn!(synthesizer = self.synthesizer.name(), error = %e, "Rejected synthesized assessment");
            return Err(e.into());
        }

        info!(
            at_risk = assessment.is_at_risk,
            risk_type = %assessment.risk_type,
            risk_distance_km = ?assessment.risk_distance_km,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Alert check complete"
        );

        Ok(assessment)
    }

    async fn fetch_snapshot(&self) -> Result<HazardSnapshot, AlertCheckError> {
        let limit = self.config.feed_timeout;
        let feeds = &self.feeds;

        let (earthquake, landslide, fire, volcano, whirlwind, flood) = tokio::try_join!(
            fetch_one(feeds.earthquake.as_ref(), HazardKind::Earthquake, limit),
            fetch_one(feeds.landslide.as_ref(), HazardKind::Landslide, limit),
            fetch_one(feeds.fire.as_ref(), HazardKind::Fire, limit),
            fetch_one(feeds.volcano.as_ref(), HazardKind::Volcano, limit),
            fetch_one(feeds.whirlwind.as_ref(), HazardKind::Whirlwind, limit),
            fetch_one(feeds.flood.as_ref(), HazardKind::Flood, limit),
        )?;

        Ok(HazardSnapshot {
            earthquake,
            landslide,
            fire,
            volcano,
            whirlwind,
            flood,
        })
    }
}

async fn fetch_one<T: Send>(
    feed: &dyn HazardFeed<T>,
    kind: HazardKind,
    limit: Duration,
) -> Result<T, AlertCheckError> {
    match timeout(limit, feed.fetch()).await {
        Ok(Ok(record)) => Ok(record),
        Ok(Err(e)) => {
            warn!(kind = %kind, feed = feed.name(), error = %e, "Hazard feed failed");
            Err(AlertCheckError::FeedFailed {
                kind,
                reason: e.to_string(),
            })
        }
        Err(_) => {
            warn!(kind = %kind, feed = feed.name(), timeout_ms = limit.as_millis() as u64, "Hazard feed timed out");
            Err(AlertCheckError::FeedTimeout(kind))
        }
    }
}
