//! xAI Grok-based alert synthesizer.
//!
//! This crate provides [`GrokSynthesizer`], an implementation of the
//! `AlertSynthesizer` trait that asks a Grok model to pick the most urgent
//! flagged hazard and write the alert text.
//!
//! # Example
//!
//! ```rust,no_run
//! use grok_synth::{AlertSynthesizer, GrokSynthesizer, GrokSynthConfig};
//! use hazard_core::{build_request, GeoPoint, Language};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GrokSynthConfig::builder()
//!         .api_key("your-api-key")
//!         .build();
//!
//!     let synth = GrokSynthesizer::new(config)?;
//!     let request = build_request(GeoPoint::new(-6.595, 106.816), Language::English, Vec::new());
//!
//!     let assessment = synth.synthesize(&request).await?;
//!     println!("at risk: {}", assessment.is_at_risk);
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `GROK_API_KEY` | Yes | - | xAI API key |
//! | `GROK_API_URL` | No | `https://api.x.ai` | API base URL |
//! | `GROK_MODEL` | No | `grok-4-1-fast` | Model name |
//! | `GROK_MAX_TOKENS` | No | `1024` | Max response tokens |
//! | `GROK_TEMPERATURE` | No | `0.2` | Generation temperature |
//! | `ALERT_SYSTEM_PROMPT` | No | built-in | System prompt text |
//! | `ALERT_PROMPT_FILE` | No | `ALERT_PROMPT.md` | System prompt file |

mod api_types;
mod config;
mod json;
mod synthesizer;

pub use config::{GrokSynthConfig, GrokSynthConfigBuilder, DEFAULT_PROMPT_FILE};
pub use json::extract_json;
pub use synthesizer::GrokSynthesizer;

// Re-export hazard-core types for convenience
pub use hazard_core::{AlertSynthesizer, SynthesisError};
