//! The structured-output contract between the backend and the model.
//!
//! [`recipe_json_schema`] is handed to providers so the model is constrained to
//! the recipe shape; [`parse_recipe`] checks whatever came back before it is
//! returned to a client.

use crate::model::Recipe;
use serde_json::{json, Value};
use thiserror::Error;

/// Name under which the schema is registered with providers that want one
pub const RECIPE_SCHEMA_NAME: &str = "recipe";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("model returned no output")]
    Empty,

    #[error("output does not match the recipe schema: {0}")]
    Mismatch(#[from] serde_json::Error),

    #[error("recipe has no steps")]
    NoSteps,
}

/// JSON schema equivalent to [`Recipe`], in the strict form accepted by
/// structured-output APIs: every property required, no additional properties.
pub fn recipe_json_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "The title of the meal recipe."
            },
            "time": {
                "type": "string",
                "description": "Estimated cooking time for the meal (inclusive of preparation). Example: '15 Minutes'"
            },
            "ingredients": {
                "type": "array",
                "description": "A list of mandatory ingredients with their portion",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name of the ingredient."
                        },
                        "quantity": {
                            "type": "string",
                            "description": "Quantity of the ingredient, including units."
                        }
                    },
                    "required": ["name", "quantity"],
                    "additionalProperties": false
                }
            },
            "missingIngredients": {
                "type": "array",
                "description": "A list of missing ingredients that is not provided by the user.",
                "items": { "type": "string" }
            },
            "steps": {
                "type": "array",
                "description": "A list of steps guiding user to prepare the meal.",
                "items": {
                    "type": "string",
                    "description": "Short description of current step to guide the user. Use double star(**) to surround the important ingredients. Example: 'Pat the **Chicken Breast** dry with a paper towel and cut into bite-sized cubes.'"
                }
            }
        },
        "required": ["title", "time", "ingredients", "missingIngredients", "steps"],
        "additionalProperties": false
    })
}

/// Validate raw model output and turn it into a [`Recipe`].
///
/// A single ```json fenced block is unwrapped first. Unknown fields, missing
/// fields, wrong types and an empty step list are all rejected.
pub fn parse_recipe(raw: &str) -> Result<Recipe, SchemaError> {
    let payload = unwrap_json_fence(raw);
    if payload.is_empty() {
        return Err(SchemaError::Empty);
    }

    let recipe: Recipe = serde_json::from_str(payload)?;
    if recipe.steps.is_empty() {
        return Err(SchemaError::NoSteps);
    }
    Ok(recipe)
}

fn unwrap_json_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```JSON"))
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
