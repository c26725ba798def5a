use crate::config::ProviderConfig;
use crate::providers::{check_status, LlmError, LlmProvider, RECIPE_SYSTEM_PROMPT};
use crate::schema::recipe_json_schema;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Structured output is obtained by forcing a call to this tool, whose input
/// schema is the recipe schema.
const RECIPE_TOOL: &str = "emit_recipe";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, LlmError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| {
                LlmError::NotConfigured(
                    "ANTHROPIC_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "system": RECIPE_SYSTEM_PROMPT,
                "tools": [{
                    "name": RECIPE_TOOL,
                    "description": "Return the generated recipe.",
                    "input_schema": recipe_json_schema()
                }],
                "tool_choice": {"type": "tool", "name": RECIPE_TOOL},
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await?;

        let response_body: Value = check_status(response).await?.json().await?;
        debug!("{:?}", response_body);

        let input = response_body["content"]
            .as_array()
            .and_then(|blocks| {
                blocks
                    .iter()
                    .find(|block| block["type"] == "tool_use" && block["name"] == RECIPE_TOOL)
            })
            .map(|block| &block["input"])
            .ok_or_else(|| {
                LlmError::EmptyResponse(
                    "Failed to extract tool input from Anthropic response".to_string(),
                )
            })?;

        Ok(input.to_string())
    }
}
