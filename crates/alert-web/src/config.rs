//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Which alert writer backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesizerKind {
    /// Deterministic, offline rule table.
    Rules,
    /// xAI Grok chat completions.
    Grok,
}

impl FromStr for SynthesizerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rules" | "rule" | "mock" => Ok(SynthesizerKind::Rules),
            "grok" => Ok(SynthesizerKind::Grok),
            other => Err(ConfigError::UnknownSynthesizer(other.to_string())),
        }
    }
}

/// Alert web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Alert writer to use.
    pub synthesizer: SynthesizerKind,
    /// Base URL of the hazard feed service. `None` serves built-in data.
    pub feed_url: Option<String>,
    /// Simulated latency for the built-in data.
    pub feed_latency: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ALERT_WEB_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `ALERT_SYNTHESIZER` | `rules` or `grok` | `rules` |
    /// | `HAZARD_FEED_URL` | Hazard feed base URL | (built-in Bogor data) |
    /// | `HAZARD_FEED_LATENCY_MS` | Latency of built-in data | `0` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ALERT_WEB_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let synthesizer: SynthesizerKind = env::var("ALERT_SYNTHESIZER")
            .unwrap_or_else(|_| "rules".to_string())
            .parse()?;

        let feed_url = env::var("HAZARD_FEED_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let feed_latency = match env::var("HAZARD_FEED_LATENCY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.trim().parse().map_err(|_| ConfigError::InvalidLatency)?,
            ),
            Err(_) => Duration::ZERO,
        };

        Ok(Self {
            addr,
            synthesizer,
            feed_url,
            feed_latency,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ALERT_WEB_ADDR format")]
    InvalidAddr,

    #[error("Unknown ALERT_SYNTHESIZER '{0}', expected 'rules' or 'grok'")]
    UnknownSynthesizer(String),

    #[error("HAZARD_FEED_LATENCY_MS must be a whole number of milliseconds")]
    InvalidLatency,
}
