//! Configuration for the alert checker.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use hazard_core::DEFAULT_UNSAFE_RADIUS_KM;

use crate::error::AlertCheckError;

/// Default per-feed fetch timeout.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default synthesis timeout.
pub const DEFAULT_SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Tunables for an [`AlertChecker`](crate::AlertChecker).
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCheckConfig {
    /// Radius within which a proximity hazard can be flagged, in km.
    pub unsafe_radius_km: f64,

    /// Upper bound on each feed fetch.
    pub feed_timeout: Duration,

    /// Upper bound on the synthesis call.
    pub synthesis_timeout: Duration,

    /// Freshness window for cached feed records. `None` disables caching.
    pub feed_cache_ttl: Option<Duration>,
}

impl Default for AlertCheckConfig {
    fn default() -> Self {
        Self {
            unsafe_radius_km: DEFAULT_UNSAFE_RADIUS_KM,
            feed_timeout: DEFAULT_FEED_TIMEOUT,
            synthesis_timeout: DEFAULT_SYNTHESIS_TIMEOUT,
            feed_cache_ttl: None,
        }
    }
}

impl AlertCheckConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `ALERT_UNSAFE_RADIUS_KM` | `20` | Unsafe radius in km |
    /// | `ALERT_FEED_TIMEOUT_MS` | `5000` | Per-feed fetch timeout |
    /// | `ALERT_SYNTHESIS_TIMEOUT_SECS` | `30` | Synthesis timeout |
    /// | `ALERT_FEED_CACHE_SECS` | `0` | Feed cache window, 0 disables |
    ///
    /// A variable that is set but does not parse is an error rather than a
    /// silent fallback.
    pub fn from_env() -> Result<Self, AlertCheckError> {
        let unsafe_radius_km = parse_var("ALERT_UNSAFE_RADIUS_KM", DEFAULT_UNSAFE_RADIUS_KM)?;
        let feed_timeout_ms = parse_var(
            "ALERT_FEED_TIMEOUT_MS",
            DEFAULT_FEED_TIMEOUT.as_millis() as u64,
        )?;
        let synthesis_timeout_secs = parse_var(
            "ALERT_SYNTHESIS_TIMEOUT_SECS",
            DEFAULT_SYNTHESIS_TIMEOUT.as_secs(),
        )?;
        let cache_secs: u64 = parse_var("ALERT_FEED_CACHE_SECS", 0)?;

        let config = Self {
            unsafe_radius_km,
            feed_timeout: Duration::from_millis(feed_timeout_ms),
            synthesis_timeout: Duration::from_secs(synthesis_timeout_secs),
            feed_cache_ttl: (cache_secs > 0).then(|| Duration::from_secs(cache_secs)),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_unsafe_radius_km(mut self, km: f64) -> Self {
        self.unsafe_radius_km = km;
        self
    }

    pub fn with_feed_timeout(mut self, timeout: Duration) -> Self {
        self.feed_timeout = timeout;
        self
    }

    pub fn with_synthesis_timeout(mut self, timeout: Duration) -> Self {
        self.synthesis_timeout = timeout;
        self
    }

    pub fn with_feed_cache(mut self, ttl: Duration) -> Self {
        self.feed_cache_ttl = (!ttl.is_zero()).then_some(ttl);
        self
    }

    /// Reject values that would make every check fail or every hazard pass.
    pub fn validate(&self) -> Result<(), AlertCheckError> {
        if !self.unsafe_radius_km.is_finite() || self.unsafe_radius_km <= 0.0 {
            return Err(AlertCheckError::Configuration(format!(
                "unsafe radius must be a positive number of km, got {}",
                self.unsafe_radius_km
            )));
        }
        if self.feed_timeout.is_zero() {
            return Err(AlertCheckError::Configuration(
                "feed timeout must be greater than zero".to_string(),
            ));
        }
        if self.synthesis_timeout.is_zero() {
            return Err(AlertCheckError::Configuration(
                "synthesis timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AlertCheckError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AlertCheckError::Configuration(format!("{} has an invalid value: {}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
