//! Completion service abstraction.

pub mod openai;

pub use openai::OpenAiClient;

use thiserror::Error;

/// The completion service could not produce an answer.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion service returned no choices")]
    EmptyResponse,
}

/// A single-turn text completion backend.
pub trait CompletionClient {
    fn name(&self) -> &'static str;

    /// Ask `question` with `context` prepended and return the top answer
    /// unmodified.
    fn complete(&self, question: &str, context: &str) -> Result<String, LlmError>;
}

/// Combine context and question into the single user message sent upstream.
pub fn format_prompt(question: &str, context: &str) -> String {
    format!("{context}\n\nQuestion: {question}\nAnswer:")
}
