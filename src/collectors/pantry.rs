use super::{ContextCollector, FragmentListener, Key, OrderedSet, Subscribers, TextInput};
use crate::catalog::{DEFAULT_PANTRY_STAPLES, SUGGESTED_STAPLES};

pub const NO_PANTRY_ITEMS: &str = "No Pantry Items Available.";

/// Seasonings and sauces the user keeps at home
#[derive(Debug)]
pub struct PantryShelf {
    items: OrderedSet,
    input: TextInput,
    subscribers: Subscribers,
}

impl Default for PantryShelf {
    fn default() -> Self {
        Self::with_items(DEFAULT_PANTRY_STAPLES.iter().copied())
    }
}

impl PantryShelf {
    /// A shelf seeded with the default staples
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().collect(),
            input: TextInput::default(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn items(&self) -> &OrderedSet {
        &self.items
    }

    /// Add an item after trimming it. Blank and duplicate items are rejected.
    pub fn add(&mut self, item: &str) -> bool {
        let trimmed = item.trim();
        if trimmed.is_empty() || !self.items.insert(trimmed) {
            return false;
        }
        self.changed();
        true
    }

    pub fn remove(&mut self, item: &str) -> bool {
        if self.items.remove(item) {
            self.changed();
            true
        } else {
            false
        }
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set(value);
    }

    /// Add the typed text. The field is only cleared when the item was accepted.
    pub fn submit_input(&mut self) -> bool {
        let value = self.input.value().to_string();
        let added = self.add(&value);
        if added {
            self.input.clear();
        }
        added
    }

    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.submit_input(),
            Key::Other => false,
        }
    }

    /// Suggested staples not already on the shelf
    pub fn quick_add_suggestions(&self) -> Vec<&'static str> {
        SUGGESTED_STAPLES
            .iter()
            .copied()
            .filter(|item| !self.items.contains(item))
            .collect()
    }

    /// Header line, e.g. "6 items • Cooking Oil, Salt, Black Pepper..."
    pub fn summary(&self) -> String {
        if self.items.is_empty() {
            return "Empty".to_string();
        }
        let preview: Vec<&str> = self.items.iter().take(3).collect();
        format!(
            "{} items • {}{}",
            self.items.len(),
            preview.join(", "),
            if self.items.len() > 3 { "..." } else { "" }
        )
    }

    fn changed(&mut self) {
        let fragment = self.current_fragment();
        self.subscribers.notify(&fragment);
    }
}

impl ContextCollector for PantryShelf {
    fn current_fragment(&self) -> String {
        if self.items.is_empty() {
            NO_PANTRY_ITEMS.to_string()
        } else {
            format!("Available Pantry Items: {}", self.items.join(", "))
        }
    }

    fn subscribe(&mut self, listener: FragmentListener) {
        let fragment = self.current_fragment();
        self.subscribers.add(listener, &fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_default_staples() {
        let pantry = PantryShelf::new();
        assert_eq!(pantry.items().len(), 5);
        assert_eq!(
            pantry.current_fragment(),
            "Available Pantry Items: Cooking Oil, Salt, Black Pepper, Soy Sauce, Garlic"
        );
    }

    #[test]
    fn test_empty_pantry_sentence() {
        let mut pantry = PantryShelf::with_items(["Salt"]);
        assert!(pantry.remove("Salt"));
        assert_eq!(pantry.current_fragment(), NO_PANTRY_ITEMS);
        assert_eq!(pantry.summary(), "Empty");
    }

    #[test]
    fn test_add_rejects_duplicates_and_blank() {
        let mut pantry = PantryShelf::new();
        assert!(!pantry.add("Salt"));
        assert!(!pantry.add("  Salt "));
        assert!(!pantry.add("   "));
        assert!(pantry.add(" Butter "));
        assert!(!pantry.add("Butter"));
        assert_eq!(pantry.items().iter().filter(|i| *i == "Butter").count(), 1);
    }

    #[test]
    fn test_rejected_input_keeps_text() {
        let mut pantry = PantryShelf::new();
        pantry.set_input("Salt");
        assert!(!pantry.key_down(Key::Enter));
        assert_eq!(pantry.input().value(), "Salt");

        pantry.set_input("Fish Sauce");
        assert!(pantry.key_down(Key::Enter));
        assert_eq!(pantry.input().value(), "");
        assert!(pantry.items().contains("Fish Sauce"));
    }

    #[test]
    fn test_quick_add_suggestions_skip_existing() {
        let mut pantry = PantryShelf::new();
        assert_eq!(pantry.quick_add_suggestions().len(), 7);

        pantry.add("Sugar");
        let suggestions = pantry.quick_add_suggestions();
        assert_eq!(suggestions.len(), 6);
        assert!(!suggestions.contains(&"Sugar"));
    }

    #[test]
    fn test_summary_preview() {
        let pantry = PantryShelf::new();
        assert_eq!(pantry.summary(), "5 items • Cooking Oil, Salt, Black Pepper...");

        let small = PantryShelf::with_items(["Salt", "Sugar"]);
        assert_eq!(small.summary(), "2 items • Salt, Sugar");
    }
}
