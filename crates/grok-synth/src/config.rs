//! Configuration for GrokSynthesizer.

use std::env;
use std::path::Path;
use std::str::FromStr;

use hazard_core::{SynthesisError, DEFAULT_ALERT_SYSTEM_PROMPT};
use tracing::warn;

/// Prompt file read when `ALERT_SYSTEM_PROMPT` is not set.
pub const DEFAULT_PROMPT_FILE: &str = "ALERT_PROMPT.md";

const DEFAULT_API_URL: &str = "https://api.x.ai";
const DEFAULT_MODEL: &str = "grok-4-1-fast";
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Alerts should read the same for the same facts, so sampling stays cool.
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Configuration for GrokSynthesizer.
#[derive(Debug, Clone)]
pub struct GrokSynthConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub api_url: String,

    pub api_key: String,

    pub model: String,

    /// Alert-writing instructions sent as the system message.
    pub system_prompt: String,

    /// Upper bound on the reply. One alert object fits well inside the default.
    pub max_tokens: u32,

    /// Sampling temperature, 0.0 to 2.0.
    pub temperature: f32,
}

impl Default for GrokSynthConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_ALERT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GrokSynthConfig {
    /// Read the configuration from the environment.
    ///
    /// `GROK_API_KEY` is required. `GROK_API_URL`, `GROK_MODEL`,
    /// `GROK_MAX_TOKENS` and `GROK_TEMPERATURE` override the defaults; a
    /// value that does not parse, or a temperature outside 0.0 to 2.0, is
    /// logged and ignored.
    ///
    /// The system prompt comes from `ALERT_SYSTEM_PROMPT` when set, otherwise
    /// from the file named by `ALERT_PROMPT_FILE` (default `ALERT_PROMPT.md`),
    /// otherwise the built-in alert prompt.
    pub fn from_env() -> Result<Self, SynthesisError> {
        let api_key = env::var("GROK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SynthesisError::Configuration("GROK_API_KEY not set".to_string()))?;

        let mut builder = Self::builder().api_key(api_key);

        if let Ok(url) = env::var("GROK_API_URL") {
            builder = builder.api_url(url);
        }
        if let Ok(model) = env::var("GROK_MODEL") {
            builder = builder.model(model);
        }
        if let Some(tokens) = parse_var::<u32>("GROK_MAX_TOKENS") {
            builder = builder.max_tokens(tokens);
        }
        match parse_var::<f32>("GROK_TEMPERATURE") {
            Some(temp) if (0.0..=2.0).contains(&temp) => builder = builder.temperature(temp),
            Some(temp) => warn!(temperature = temp, "GROK_TEMPERATURE out of range, ignoring"),
            None => {}
        }

        builder = match env::var("ALERT_SYSTEM_PROMPT") {
            Ok(prompt) => builder.system_prompt(prompt),
            Err(_) => {
                let path = env::var("ALERT_PROMPT_FILE")
                    .unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
                builder.load_prompt_file(path)
            }
        };

        Ok(builder.build())
    }

    pub fn builder() -> GrokSynthConfigBuilder {
        GrokSynthConfigBuilder::default()
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "Unparseable value, using default");
            None
        }
    }
}

/// Builder for GrokSynthConfig.
#[derive(Debug, Default)]
pub struct GrokSynthConfigBuilder {
    config: GrokSynthConfig,
}

impl GrokSynthConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Use the contents of `path` as the system prompt.
    ///
    /// A missing, unreadable or blank file keeps the current prompt.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) if !content.trim().is_empty() => {
                self.config.system_prompt = content.trim().to_string();
            }
            Ok(_) => warn!(path = %path.display(), "Prompt file is empty, keeping current prompt"),
            Err(_) => {}
        }
        self
    }

    pub fn build(self) -> GrokSynthConfig {
        self.config
    }
}
