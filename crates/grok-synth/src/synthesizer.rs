//! GrokSynthesizer implementation using xAI API.

use hazard_core::{
    async_trait, hash_prompt, prompt::render_request, AlertAssessment, AlertSynthesisRequest,
    AlertSynthesizer, SynthesisError,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};
use crate::config::GrokSynthConfig;
use crate::json::extract_json;

/// An alert synthesizer backed by xAI's Grok chat completions API.
///
/// Each call is a single, stateless exchange: the system prompt plus the
/// rendered hazard facts go out, one JSON assessment comes back. There is no
/// retry here; the caller owns the timeout.
pub struct GrokSynthesizer {
    client: Client,
    config: GrokSynthConfig,
    system_prompt_hash: String,
}

impl GrokSynthesizer {
    /// Create a new GrokSynthesizer with the given configuration.
    pub fn new(config: GrokSynthConfig) -> Result<Self, SynthesisError> {
        if config.api_key.trim().is_empty() {
            return Err(SynthesisError::Configuration(
                "Grok API key is empty".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            SynthesisError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        let system_prompt_hash = hash_prompt(&config.system_prompt);
        info!(
            model = %config.model,
            prompt_hash = %system_prompt_hash,
            "GrokSynthesizer initialized"
        );

        Ok(Self {
            client,
            config,
            system_prompt_hash,
        })
    }

    /// Create a GrokSynthesizer from environment variables.
    ///
    /// See [`GrokSynthConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, SynthesisError> {
        Self::new(GrokSynthConfig::from_env()?)
    }

    pub fn config(&self) -> &GrokSynthConfig {
        &self.config
    }

    /// SHA-256 fingerprint of the system prompt in use.
    pub fn system_prompt_hash(&self) -> &str {
        &self.system_prompt_hash
    }

    fn build_messages(&self, request: &AlertSynthesisRequest) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.config.system_prompt.clone()),
            ChatMessage::user(render_request(request)),
        ]
    }

    /// Make a chat completion request to the xAI API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, SynthesisError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.api_url.trim_end_matches('/')
        );

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
            response_format: Some(ResponseFormat::json_object()),
        };

        debug!(model = %request.model, "Sending request to xAI API");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesisError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            let message = format!("API error ({}): {}", status.as_u16(), detail);
            return Err(if status.is_server_error() || status.as_u16() == 429 {
                SynthesisError::Unavailable(message)
            } else {
                SynthesisError::ProcessingFailed(message)
            });
        }

        response.json().await.map_err(|e| {
            SynthesisError::ProcessingFailed(format!("Failed to parse response: {}", e))
        })
    }
}

/// Decode the assistant reply into an assessment.
fn parse_assessment(content: &str) -> Result<AlertAssessment, SynthesisError> {
    let json = extract_json(content);
    serde_json::from_str(json).map_err(|e| {
        SynthesisError::InvalidResponse(format!("reply is not an alert assessment: {}", e))
    })
}

#[async_trait]
impl AlertSynthesizer for GrokSynthesizer {
    async fn synthesize(
        &self,
        request: &AlertSynthesisRequest,
    ) -> Result<AlertAssessment, SynthesisError> {
        let messages = self.build_messages(request);
        let completion = self.chat_completion(messages).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        let choice = completion.choices.first().ok_or_else(|| {
            SynthesisError::InvalidResponse("response contained no choices".to_string())
        })?;

        let content = choice.message.content.as_deref().ok_or_else(|| {
            warn!(finish_reason = ?choice.finish_reason, "No content in response");
            SynthesisError::InvalidResponse("response contained no content".to_string())
        })?;

        parse_assessment(content)
    }

    fn name(&self) -> &str {
        "GrokSynthesizer"
    }

    async fn is_ready(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
