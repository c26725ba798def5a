use super::{ContextCollector, FragmentListener, Key, OrderedSet, Subscribers, TextInput};
use crate::catalog::{all_ingredients, is_predefined_ingredient, IngredientCategory};

pub const PERMISSIVE_INSTRUCTION: &str = "If the recipe needs essential items I didn't list (like Oil, Salt, specific sauces), list them in 'missingIngredients'.";

pub const STRICT_INSTRUCTION: &str = "STRICT MODE ACTIVE: You must ONLY use the ingredients listed above. Do NOT suggest buying new items. If the result is simple or dry, that is acceptable. Do not populate 'missingIngredients'.";

/// The ingredients the user has, plus whether the recipe may ask for extras
#[derive(Debug)]
pub struct IngredientSelector {
    selected: OrderedSet,
    allow_extras: bool,
    input: TextInput,
    query: String,
    active_category: IngredientCategory,
    subscribers: Subscribers,
}

impl Default for IngredientSelector {
    fn default() -> Self {
        Self {
            selected: OrderedSet::new(),
            allow_extras: true,
            input: TextInput::default(),
            query: String::new(),
            active_category: IngredientCategory::default(),
            subscribers: Subscribers::default(),
        }
    }
}

impl IngredientSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &OrderedSet {
        &self.selected
    }

    pub fn allow_extras(&self) -> bool {
        self.allow_extras
    }

    pub fn set_allow_extras(&mut self, allow_extras: bool) {
        if self.allow_extras != allow_extras {
            self.allow_extras = allow_extras;
            self.changed();
        }
    }

    /// Select the item if absent, deselect it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, item: &str) -> bool {
        let selected = self.selected.toggle(item);
        self.changed();
        selected
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set(value);
    }

    /// Add the typed text as a custom ingredient.
    ///
    /// Whitespace-only input is ignored. A non-empty input is always cleared,
    /// even when the ingredient was already selected. Returns whether the
    /// selection changed.
    pub fn submit_input(&mut self) -> bool {
        let Some(item) = self.input.trimmed().map(str::to_string) else {
            return false;
        };
        self.input.clear();
        self.add(item)
    }

    /// Enter in the text field behaves like the "Add" button
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.submit_input(),
            Key::Other => false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn active_category(&self) -> IngredientCategory {
        self.active_category
    }

    pub fn set_active_category(&mut self, category: IngredientCategory) {
        self.active_category = category;
    }

    /// Predefined ingredients to show as choices.
    ///
    /// With a search query, every catalog item whose name contains the query
    /// (case-insensitive) across all categories; otherwise the active category.
    pub fn candidates(&self) -> Vec<&'static str> {
        match self.trimmed_query() {
            Some(query) => {
                let needle = query.to_lowercase();
                all_ingredients()
                    .filter(|item| item.to_lowercase().contains(&needle))
                    .collect()
            }
            None => self.active_category.items().to_vec(),
        }
    }

    /// The query text to offer as a custom ingredient when the search matched nothing
    pub fn custom_offer(&self) -> Option<&str> {
        let query = self.trimmed_query()?;
        self.candidates().is_empty().then_some(query)
    }

    /// Accept the custom offer: add the query as an ingredient and clear the search
    pub fn add_query_as_custom(&mut self) -> bool {
        let Some(item) = self.custom_offer().map(str::to_string) else {
            return false;
        };
        self.query.clear();
        self.add(item)
    }

    /// Selected items that are not in the predefined catalog
    pub fn extras(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter(|item| !is_predefined_ingredient(item))
            .collect()
    }

    /// Header line, e.g. "2 items selected • No Extra Ingredients"
    pub fn summary(&self) -> String {
        match self.selected.len() {
            0 => "Select what you have in the fridge".to_string(),
            n => format!(
                "{} item{} selected • {} Extra Ingredients",
                n,
                if n == 1 { "" } else { "s" },
                if self.allow_extras { "Allow" } else { "No" }
            ),
        }
    }

    fn trimmed_query(&self) -> Option<&str> {
        let query = self.query.trim();
        (!query.is_empty()).then_some(query)
    }

    fn add(&mut self, item: String) -> bool {
        if self.selected.insert(item) {
            self.changed();
            true
        } else {
            false
        }
    }

    fn changed(&mut self) {
        let fragment = self.current_fragment();
        self.subscribers.notify(&fragment);
    }
}

impl ContextCollector for IngredientSelector {
    fn current_fragment(&self) -> String {
        if self.selected.is_empty() {
            return String::new();
        }

        let instruction = if self.allow_extras {
            PERMISSIVE_INSTRUCTION
        } else {
            STRICT_INSTRUCTION
        };

        format!(
            "AVAILABLE INGREDIENTS:\n{}\n{}",
            self.selected.join(", "),
            instruction
        )
    }

    fn subscribe(&mut self, listener: FragmentListener) {
        let fragment = self.current_fragment();
        self.subscribers.add(listener, &fragment);
    }
}
