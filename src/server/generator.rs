use crate::error::RecipeError;
use crate::model::Recipe;
use crate::providers::LlmProvider;
use crate::schema::parse_recipe;
use log::{debug, info, warn};

/// Backend core: one prompt in, one schema-checked recipe out
pub struct RecipeGenerator {
    provider: Box<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Generate a recipe with a single model call.
    ///
    /// # Errors
    /// - [`RecipeError::InvalidInput`] when the prompt is blank
    /// - [`RecipeError::GenerationFailed`] when the model call fails or its
    ///   output does not match the recipe schema
    pub async fn generate(&self, prompt: &str) -> Result<Recipe, RecipeError> {
        if prompt.trim().is_empty() {
            return Err(RecipeError::InvalidInput("Prompt is required".to_string()));
        }

        debug!(
            "Generating recipe with {} ({})",
            self.provider.provider_name(),
            self.provider.model_name()
        );

        let raw = self.provider.generate(prompt).await.map_err(|e| {
            warn!("{} call failed: {}", self.provider.provider_name(), e);
            RecipeError::GenerationFailed(e.to_string())
        })?;
        debug!("Raw model output: {}", raw);

        let recipe = parse_recipe(&raw).map_err(|e| {
            warn!("Rejected model output: {}", e);
            RecipeError::GenerationFailed(e.to_string())
        })?;

        info!(
            "Generated '{}' ({} steps)",
            recipe.title,
            recipe.steps.len()
        );
        Ok(recipe)
    }
}
