//! OpenAI-compatible chat completions client.

use super::{format_prompt, CompletionClient, LlmError};
use crate::domain::{DEFAULT_API_BASE, DEFAULT_MODEL};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking client for `POST {api_base}/chat/completions`.
pub struct OpenAiClient {
    api_key: SecretString,
    api_base: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl OpenAiClient {
    /// Creates a client with no request timeout.
    pub fn new(api_key: SecretString) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, None)
    }

    /// Creates a client; `None` lets a request block until the server answers.
    pub fn with_timeout(
        api_key: SecretString,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl CompletionClient for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn complete(&self, question: &str, context: &str) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: format_prompt(question, context) }],
        };

        tracing::info!(model = %self.model, "Sending completion request");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Status { status: status.as_u16(), body });
        }

        let response: ChatCompletionResponse = response.json()?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
