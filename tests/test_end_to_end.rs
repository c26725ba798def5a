use smartcook::catalog::DEFAULT_PANTRY_STAPLES;
use smartcook::providers::FakeProvider;
use smartcook::server::{self, RecipeGenerator, GENERATE_RECIPE_PATH};
use smartcook::{assemble_prompt, CookPage, RecipeClient, Screen, ViewMode};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestBackend {
    endpoint: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl TestBackend {
    async fn start(provider: FakeProvider) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!(
            "http://{}{}",
            listener.local_addr().unwrap(),
            GENERATE_RECIPE_PATH
        );
        let (tx, rx) = oneshot::channel::<()>();
        let generator = Arc::new(RecipeGenerator::new(Box::new(provider)));
        let handle = tokio::spawn(server::serve(listener, generator, async {
            let _ = rx.await;
        }));

        Self {
            endpoint,
            shutdown: Some(tx),
            handle,
        }
    }

    fn client(&self) -> RecipeClient {
        RecipeClient::new(self.endpoint.clone(), Duration::from_secs(5)).unwrap()
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn test_selection_to_overview() {
    let _ = env_logger::try_init();
    let backend = TestBackend::start(FakeProvider::new()).await;

    let mut page = CookPage::new();
    page.ingredients_mut().toggle("Chicken Breast");
    page.ingredients_mut().toggle("Garlic");
    assert!(page.ingredients().allow_extras());
    assert_eq!(page.pantry().items().len(), DEFAULT_PANTRY_STAPLES.len());

    let fragments = page.fragments();
    let prompt = assemble_prompt(&fragments);
    assert_eq!(prompt.matches(fragments.ingredients.as_str()).count(), 1);
    assert_eq!(prompt.matches(fragments.pantry.as_str()).count(), 1);
    assert_eq!(prompt.matches(fragments.profile.as_str()).count(), 1);
    assert!(fragments.ingredients.contains("Chicken Breast, Garlic"));
    assert!(fragments
        .pantry
        .contains("Cooking Oil, Salt, Black Pepper, Soy Sauce, Garlic"));

    page.generate(&backend.client()).await.unwrap();

    let view = match page.screen() {
        Screen::Recipe(view) => view,
        Screen::Selection => panic!("expected the recipe screen"),
    };
    assert_eq!(view.mode(), ViewMode::Overview);
    assert_eq!(view.recipe().title, "Garlic Chicken Stir-fry");
    assert_eq!(view.step_count(), 3);

    let view = page.recipe_view_mut().unwrap();
    view.start_cooking();
    for _ in 0..3 {
        assert_eq!(view.mode(), ViewMode::Cooking);
        view.next();
    }
    assert_eq!(view.mode(), ViewMode::Overview);

    backend.stop().await;
}

#[tokio::test]
async fn test_backend_failure_keeps_selection() {
    let backend = TestBackend::start(FakeProvider::with_response("not json at all")).await;

    let mut page = CookPage::new();
    page.ingredients_mut().toggle("Eggs");

    let err = page.generate(&backend.client()).await.unwrap_err();
    assert_eq!(err.kind(), smartcook::ErrorKind::GenerationFailed);
    assert!(matches!(page.screen(), Screen::Selection));

    backend.stop().await;
}

#[tokio::test]
async fn test_router_rejects_missing_prompt() {
    let backend = TestBackend::start(FakeProvider::new()).await;

    let response = reqwest::Client::new()
        .post(&backend.endpoint)
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Prompt is required");

    let response = reqwest::Client::new()
        .post(&backend.endpoint)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    backend.stop().await;
}

#[tokio::test]
async fn test_router_hides_generation_details() {
    let backend = TestBackend::start(FakeProvider::failing()).await;

    let response = reqwest::Client::new()
        .post(&backend.endpoint)
        .json(&serde_json::json!({ "prompt": "Eggs" }))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Failed to generate recipe" }));

    backend.stop().await;
}
