use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::model::Recipe;
use crate::schema::parse_recipe;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;

/// Anything that can turn a prompt into a recipe
#[async_trait]
pub trait RecipeService {
    async fn request_recipe(&self, prompt: &str) -> Result<Recipe, RecipeError>;
}

/// HTTP client for the generate-recipe endpoint.
///
/// Sends exactly one request per call: no retries, deduplication or caching.
pub struct RecipeClient {
    client: Client,
    endpoint: String,
}

impl RecipeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RecipeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        Self::new(
            config.client.endpoint.clone(),
            Duration::from_secs(config.timeout),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeService for RecipeClient {
    /// # Errors
    /// - [`RecipeError::InvalidInput`] for an empty prompt (no request is sent)
    ///   or an HTTP 400 answer
    /// - [`RecipeError::GenerationFailed`] for an HTTP 500 answer or a body
    ///   that is not a recipe with at least one step
    /// - [`RecipeError::RequestFailed`] when the backend cannot be reached or
    ///   answers with any other status
    async fn request_recipe(&self, prompt: &str) -> Result<Recipe, RecipeError> {
        if prompt.trim().is_empty() {
            return Err(RecipeError::InvalidInput("Prompt is required".to_string()));
        }

        debug!("POST {} ({} bytes of prompt)", self.endpoint, prompt.len());
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Backend answered {}: {}", status, body);
            return Err(match status {
                StatusCode::BAD_REQUEST => RecipeError::InvalidInput(body),
                StatusCode::INTERNAL_SERVER_ERROR => RecipeError::GenerationFailed(body),
                _ => RecipeError::RequestFailed(format!("unexpected status {}", status)),
            });
        }

        let body = response.text().await?;
        parse_recipe(&body)
            .map_err(|e| RecipeError::GenerationFailed(format!("invalid recipe body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_prompt_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate-recipe")
            .expect(0)
            .create_async()
            .await;

        let client = RecipeClient::new(
            format!("{}/api/generate-recipe", server.url()),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.request_recipe("   ").await.unwrap_err();
        assert!(matches!(err, RecipeError::InvalidInput(_)));
        mock.assert_async().await;
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let client = RecipeClient::from_config(&AppConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:3000/api/generate-recipe"
        );
    }
}
