//! Fake LLM provider for offline runs and tests.
//!
//! Returns a fixed response regardless of the prompt, so the whole
//! backend can be exercised without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

const SAMPLE_RECIPE: &str = r#"{
    "title": "Garlic Chicken Stir-fry",
    "time": "20 Minutes",
    "ingredients": [
        {"name": "Chicken Breast", "quantity": "200 g"},
        {"name": "Garlic", "quantity": "3 cloves"},
        {"name": "Soy Sauce", "quantity": "1 tbsp"},
        {"name": "Cooking Oil", "quantity": "1 tbsp"}
    ],
    "missingIngredients": [],
    "steps": [
        "Pat the **Chicken Breast** dry and cut it into bite-sized cubes.",
        "Heat the **Cooking Oil** in a pan and fry the minced **Garlic** until fragrant.",
        "Add the chicken, stir-fry for 8 minutes, then season with **Soy Sauce**."
    ]
}"#;

#[derive(Debug)]
pub struct FakeProvider {
    response: Option<String>,
    calls: AtomicUsize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::with_response(SAMPLE_RECIPE)
    }
}

impl FakeProvider {
    /// A provider answering every prompt with a small valid recipe
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider answering every prompt with `response`, valid or not
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose every call fails
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    fn provider_name(&self) -> &str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::EmptyResponse(format!(
                "FakeProvider: no response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }
}
