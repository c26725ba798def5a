pub mod assembler;
pub mod catalog;
pub mod client;
pub mod collectors;
pub mod config;
pub mod emphasis;
pub mod error;
pub mod model;
pub mod page;
pub mod providers;
pub mod recipe_view;
pub mod render;
pub mod schema;
pub mod server;

pub use assembler::{assemble_prompt, ContextFragments};
pub use client::{RecipeClient, RecipeService};
pub use config::AppConfig;
pub use error::{ErrorKind, RecipeError};
pub use model::{Ingredient, Recipe};
pub use page::{CookPage, GenerationStatus, Screen};
pub use recipe_view::{RecipeView, ViewMode};

/// Send `prompt` to the backend configured in `config.toml` / `SMARTCOOK__*`
pub async fn request_recipe(prompt: &str) -> Result<Recipe, RecipeError> {
    let config = AppConfig::load()?;
    RecipeClient::from_config(&config)?
        .request_recipe(prompt)
        .await
}
