//! HTTP interface for the Siaga Bogor nearby-alert engine.
//!
//! Exposes the alert check as `POST /api/nearby-alert` plus a health probe.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use grok_synth::GrokSynthesizer;
use hazard_core::AlertSynthesizer;
use hazard_feeds::{bogor, http_feeds};
use mock_synth::RuleBasedSynthesizer;
use nearby_alert::{AlertCheckConfig, AlertChecker};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, SynthesizerKind};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let check_config = AlertCheckConfig::from_env()?;
    info!(addr = %config.addr, synthesizer = ?config.synthesizer, "Starting alert web server");

    let synthesizer: Arc<dyn AlertSynthesizer> = match config.synthesizer {
        SynthesizerKind::Rules => Arc::new(RuleBasedSynthesizer::new()),
        SynthesizerKind::Grok => Arc::new(GrokSynthesizer::from_env()?),
    };

    let feeds = match &config.feed_url {
        Some(url) => {
            info!(url = %url, "Using HTTP hazard feeds");
            http_feeds(url, check_config.feed_timeout)?
        }
        None => {
            info!(
                latency_ms = config.feed_latency.as_millis() as u64,
                "Using built-in Bogor hazard data"
            );
            bogor::feeds(config.feed_latency)
        }
    };

    let checker = AlertChecker::new(feeds, synthesizer, check_config)?;
    let app = routes::app(AppState::new(checker));

    info!(addr = %config.addr, "Alert web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
