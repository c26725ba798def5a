//! Selection segments that turn user choices into prompt context.
//!
//! Each collector owns its own state and exposes a pure [`ContextCollector::current_fragment`]
//! query. Listeners registered with [`ContextCollector::subscribe`] are called
//! synchronously with the new fragment after every mutation that changed state.
//! An empty fragment means "leave this section out of the prompt".

mod ingredients;
mod ordered_set;
mod pantry;
mod profile;

pub use ingredients::{IngredientSelector, PERMISSIVE_INSTRUCTION, STRICT_INSTRUCTION};
pub use ordered_set::OrderedSet;
pub use pantry::{PantryShelf, NO_PANTRY_ITEMS};
pub use profile::ProfileSelector;

use std::fmt;

/// Callback receiving the collector's fragment after a change
pub type FragmentListener = Box<dyn FnMut(&str)>;

pub trait ContextCollector {
    /// The fragment derived from the collector's current state
    fn current_fragment(&self) -> String;

    /// Register a listener. It is called once immediately with the current
    /// fragment, then after every change.
    fn subscribe(&mut self, listener: FragmentListener);
}

/// Listener list shared by all collectors
#[derive(Default)]
pub(crate) struct Subscribers {
    listeners: Vec<FragmentListener>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, mut listener: FragmentListener, fragment: &str) {
        listener(fragment);
        self.listeners.push(listener);
    }

    pub(crate) fn notify(&mut self, fragment: &str) {
        for listener in &mut self.listeners {
            listener(fragment);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}

/// Key events the free-text inputs react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Free-text entry field for custom items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The trimmed value, or `None` when only whitespace was typed
    pub fn trimmed(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether the "Add" button should be enabled
    pub fn can_submit(&self) -> bool {
        self.trimmed().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
