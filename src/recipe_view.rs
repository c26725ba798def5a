//! Overview / step-by-step cooking state machine for one recipe.
//!
//! ```text
//!            start_cooking
//!  Overview ───────────────▶ Cooking ──┐ next / prev / toggle overlay
//!     ▲                        │  ◀────┘
//!     └──── exit, or next at the last step
//! ```

use crate::emphasis::{parse_emphasis, Segment};
use crate::model::{Ingredient, Recipe};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    Cooking,
}

/// Per-recipe progress, discarded with the recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookingProgress {
    current_step: usize,
    prepped: HashSet<String>,
    show_ingredients: bool,
}

impl CookingProgress {
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_prepped(&self, name: &str) -> bool {
        self.prepped.contains(name)
    }

    pub fn prepped_count(&self) -> usize {
        self.prepped.len()
    }

    pub fn show_ingredients(&self) -> bool {
        self.show_ingredients
    }
}

#[derive(Debug, Clone)]
pub struct RecipeView {
    recipe: Recipe,
    mode: ViewMode,
    progress: CookingProgress,
}

impl RecipeView {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            mode: ViewMode::Overview,
            progress: CookingProgress::default(),
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn progress(&self) -> &CookingProgress {
        &self.progress
    }

    /// Overview → Cooking, from the first step with a fresh prep list
    pub fn start_cooking(&mut self) {
        self.progress = CookingProgress::default();
        self.mode = ViewMode::Cooking;
    }

    /// Cooking → Overview
    pub fn exit(&mut self) {
        self.mode = ViewMode::Overview;
    }

    /// Advance one step; at the last step this finishes and returns to the overview
    pub fn next(&mut self) {
        if self.mode != ViewMode::Cooking {
            return;
        }
        if self.is_last_step() {
            self.exit();
        } else {
            self.progress.current_step += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.mode == ViewMode::Cooking {
            self.progress.current_step = self.progress.current_step.saturating_sub(1);
        }
    }

    pub fn toggle_ingredients_overlay(&mut self) {
        self.progress.show_ingredients = !self.progress.show_ingredients;
    }

    /// Check an ingredient off the prep list, or uncheck it. Returns whether it is now prepped.
    ///
    /// Names are matched exactly and are not checked against the recipe.
    pub fn toggle_prep(&mut self, name: &str) -> bool {
        if self.progress.prepped.remove(name) {
            false
        } else {
            self.progress.prepped.insert(name.to_string());
            true
        }
    }

    pub fn step_count(&self) -> usize {
        self.recipe.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.progress.current_step + 1 >= self.step_count()
    }

    pub fn can_go_back(&self) -> bool {
        self.progress.current_step > 0
    }

    pub fn current_step(&self) -> Option<&str> {
        self.recipe
            .steps
            .get(self.progress.current_step)
            .map(String::as_str)
    }

    pub fn current_step_segments(&self) -> Vec<Segment<'_>> {
        self.current_step().map(parse_emphasis).unwrap_or_default()
    }

    /// "Step 2 of 5"
    pub fn position_label(&self) -> String {
        format!(
            "Step {} of {}",
            self.progress.current_step + 1,
            self.step_count()
        )
    }

    /// Share of steps reached, in (0, 1]
    pub fn progress_fraction(&self) -> f32 {
        if self.step_count() == 0 {
            return 1.0;
        }
        (self.progress.current_step + 1) as f32 / self.step_count() as f32
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last_step() {
            "Finish!"
        } else {
            "Next"
        }
    }

    pub fn overlay_label(&self) -> &'static str {
        if self.progress.show_ingredients {
            "Hide Ingredients"
        } else {
            "View Ingredients"
        }
    }

    /// Prep list rows with their checked state
    pub fn prep_list(&self) -> impl Iterator<Item = (&Ingredient, bool)> {
        self.recipe
            .ingredients
            .iter()
            .map(|ingredient| (ingredient, self.progress.is_prepped(&ingredient.name)))
    }

    /// Missing essentials to show, or `None` when the section is hidden
    pub fn missing_ingredients(&self) -> Option<&[String]> {
        let missing = &self.recipe.missing_ingredients;
        (!missing.is_empty()).then_some(missing.as_slice())
    }
}
