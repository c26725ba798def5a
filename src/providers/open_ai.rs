use crate::config::ProviderConfig;
use crate::providers::{check_status, LlmError, LlmProvider, RECIPE_SYSTEM_PROMPT};
use crate::schema::{recipe_json_schema, RECIPE_SCHEMA_NAME};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, LlmError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                LlmError::NotConfigured(
                    "OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": RECIPE_SYSTEM_PROMPT},
                    {"role": "user", "content": prompt}
                ],
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": RECIPE_SCHEMA_NAME,
                        "strict": true,
                        "schema": recipe_json_schema()
                    }
                },
                "temperature": self.temperature,
                "max_completion_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let response_body: Value = check_status(response).await?.json().await?;
        debug!("{:?}", response_body);

        let message = &response_body["choices"][0]["message"];
        if let Some(refusal) = message["refusal"].as_str() {
            return Err(LlmError::EmptyResponse(format!("model refused: {}", refusal)));
        }

        let content = message["content"].as_str().ok_or_else(|| {
            LlmError::EmptyResponse("Failed to extract content from response".to_string())
        })?;

        Ok(content.to_string())
    }
}
