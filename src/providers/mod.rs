mod anthropic;
mod factory;
mod fake;
mod google;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fake::FakeProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::RECIPE_SYSTEM_PROMPT;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to an LLM provider
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Model returned no structured output: {0}")]
    EmptyResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// Unified trait for all LLM providers
///
/// Implementations send the prompt as user content together with
/// [`RECIPE_SYSTEM_PROMPT`] and constrain the model to
/// [`crate::schema::recipe_json_schema`]. They return the raw JSON text; the
/// caller validates it.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "google")
    fn provider_name(&self) -> &str;

    /// Get the model name (e.g., "gemini-2.5-flash")
    fn model_name(&self) -> &str;

    /// Generate a recipe for the prompt, returning the model's JSON output
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Turn a non-success HTTP response into [`LlmError::ApiError`]
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(LlmError::ApiError {
        status: status.as_u16(),
        message,
    })
}
