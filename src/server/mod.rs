//! HTTP backend: receives prompts, returns schema-checked recipes.
//!
//! ```text
//! POST /api/generate-recipe  {"prompt": "..."}
//!   200 -> Recipe JSON
//!   400 -> {"error": "Prompt is required"}
//!   500 -> {"error": "Failed to generate recipe"}
//! GET  /health
//! ```

mod generator;

pub use generator::RecipeGenerator;

use crate::config::ServerConfig;
use crate::error::RecipeError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(generator: Arc<RecipeGenerator>) -> Router {
    Router::new()
        .route(GENERATE_RECIPE_PATH, post(generate_recipe))
        .route("/health", get(health))
        .with_state(generator)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    generator: Arc<RecipeGenerator>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(generator))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run(config: &ServerConfig, generator: RecipeGenerator) -> Result<(), RecipeError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(addr.as_str()).await?;
    info!(
        "Serving recipes with {} on http://{}{}",
        generator.provider().provider_name(),
        listener.local_addr()?,
        GENERATE_RECIPE_PATH
    );

    serve(listener, Arc::new(generator), async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutting down");
    })
    .await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn generate_recipe(
    State(generator): State<Arc<RecipeGenerator>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let prompt = match payload {
        Ok(Json(GenerateRequest {
            prompt: Some(prompt),
        })) if !prompt.trim().is_empty() => prompt,
        _ => return error_response(StatusCode::BAD_REQUEST, "Prompt is required"),
    };

    match generator.generate(&prompt).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(RecipeError::InvalidInput(message)) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => {
            error!("Recipe generation failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate recipe")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
