//! Top-level cook page: owns the collectors, the fragment board and the
//! current result.
//!
//! The board is fed by collector subscriptions, so it always holds the
//! fragments the user currently sees. A prompt is assembled from it only when
//! generation starts.

use crate::assembler::{assemble_prompt, ContextFragments};
use crate::client::RecipeService;
use crate::collectors::{ContextCollector, IngredientSelector, PantryShelf, ProfileSelector};
use crate::error::{ErrorKind, RecipeError};
use crate::model::Recipe;
use crate::recipe_view::{RecipeView, ViewMode};
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;

/// Single-flight generation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(ErrorKind),
}

#[derive(Debug, Clone)]
pub enum Screen {
    Selection,
    Recipe(RecipeView),
}

pub struct CookPage {
    profile: ProfileSelector,
    ingredients: IngredientSelector,
    pantry: PantryShelf,
    board: Rc<RefCell<ContextFragments>>,
    status: GenerationStatus,
    last_error: Option<String>,
    screen: Screen,
}

impl CookPage {
    /// A page with default profile, no ingredients and the default pantry staples
    pub fn new() -> Self {
        Self::with_collectors(
            ProfileSelector::new(),
            IngredientSelector::new(),
            PantryShelf::new(),
        )
    }

    pub fn with_collectors(
        mut profile: ProfileSelector,
        mut ingredients: IngredientSelector,
        mut pantry: PantryShelf,
    ) -> Self {
        let board = Rc::new(RefCell::new(ContextFragments::default()));

        let sink = Rc::clone(&board);
        profile.subscribe(Box::new(move |fragment: &str| {
            sink.borrow_mut().profile = fragment.to_string();
        }));
        let sink = Rc::clone(&board);
        ingredients.subscribe(Box::new(move |fragment: &str| {
            sink.borrow_mut().ingredients = fragment.to_string();
        }));
        let sink = Rc::clone(&board);
        pantry.subscribe(Box::new(move |fragment: &str| {
            sink.borrow_mut().pantry = fragment.to_string();
        }));

        Self {
            profile,
            ingredients,
            pantry,
            board,
            status: GenerationStatus::Idle,
            last_error: None,
            screen: Screen::Selection,
        }
    }

    pub fn profile(&self) -> &ProfileSelector {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileSelector {
        &mut self.profile
    }

    pub fn ingredients(&self) -> &IngredientSelector {
        &self.ingredients
    }

    pub fn ingredients_mut(&mut self) -> &mut IngredientSelector {
        &mut self.ingredients
    }

    pub fn pantry(&self) -> &PantryShelf {
        &self.pantry
    }

    pub fn pantry_mut(&mut self) -> &mut PantryShelf {
        &mut self.pantry
    }

    /// Snapshot of the fragments as last pushed by the collectors
    pub fn fragments(&self) -> ContextFragments {
        self.board.borrow().clone()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Message of the most recent failed generation, cleared on the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn recipe_view(&self) -> Option<&RecipeView> {
        match &self.screen {
            Screen::Recipe(view) => Some(view),
            Screen::Selection => None,
        }
    }

    pub fn recipe_view_mut(&mut self) -> Option<&mut RecipeView> {
        match &mut self.screen {
            Screen::Recipe(view) => Some(view),
            Screen::Selection => None,
        }
    }

    /// Generate is enabled on the selection screen when nothing is in flight
    /// and at least one ingredient is selected
    pub fn can_generate(&self) -> bool {
        matches!(self.screen, Screen::Selection)
            && self.status != GenerationStatus::InFlight
            && !self.board.borrow().ingredients.is_empty()
    }

    pub fn generate_label(&self) -> &'static str {
        if self.status == GenerationStatus::InFlight {
            "Thinking..."
        } else {
            "Generate Recipe"
        }
    }

    /// Assemble the prompt from the current fragments and enter `InFlight`.
    ///
    /// # Errors
    /// - [`RecipeError::Busy`] while another generation is in flight
    /// - [`RecipeError::InvalidInput`] when no ingredient is selected, or a
    ///   recipe is still shown
    pub fn begin_generation(&mut self) -> Result<String, RecipeError> {
        if self.status == GenerationStatus::InFlight {
            return Err(RecipeError::Busy);
        }
        if let Screen::Recipe(_) = self.screen {
            return Err(RecipeError::InvalidInput(
                "Reset the current recipe before generating a new one".to_string(),
            ));
        }
        let prompt = {
            let fragments = self.board.borrow();
            if fragments.ingredients.is_empty() {
                return Err(RecipeError::InvalidInput(
                    "Select at least one ingredient".to_string(),
                ));
            }
            assemble_prompt(&fragments)
        };
        self.status = GenerationStatus::InFlight;
        Ok(prompt)
    }

    /// Settle an in-flight generation. Failures leave the screen untouched.
    pub fn finish_generation(&mut self, result: Result<Recipe, RecipeError>) {
        match result {
            Ok(recipe) => self.show_recipe(recipe),
            Err(e) => self.record_failure(&e),
        }
    }

    /// Run one generation against `service`: exactly one request, no retries.
    pub async fn generate(&mut self, service: &dyn RecipeService) -> Result<(), RecipeError> {
        let prompt = self.begin_generation()?;
        match service.request_recipe(&prompt).await {
            Ok(recipe) => {
                self.show_recipe(recipe);
                Ok(())
            }
            Err(e) => {
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Discard the recipe and return to the selection screen.
    ///
    /// Only allowed from the overview; returns whether the page was reset.
    pub fn reset(&mut self) -> bool {
        match &self.screen {
            Screen::Recipe(view) if view.mode() == ViewMode::Overview => {
                self.screen = Screen::Selection;
                self.status = GenerationStatus::Idle;
                true
            }
            _ => false,
        }
    }

    fn show_recipe(&mut self, recipe: Recipe) {
        info!("Showing recipe '{}'", recipe.title);
        self.screen = Screen::Recipe(RecipeView::new(recipe));
        self.status = GenerationStatus::Succeeded;
        self.last_error = None;
    }

    fn record_failure(&mut self, e: &RecipeError) {
        error!("Error generating recipe: {}", e);
        self.status = GenerationStatus::Failed(e.kind());
        self.last_error = Some(e.to_string());
    }
}

impl Default for CookPage {
    fn default() -> Self {
        Self::new()
    }
}
