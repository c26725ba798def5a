use std::collections::HashSet;

/// Insertion-ordered collection of unique strings.
///
/// Membership is exact and case-sensitive: "Salt" and "salt" are different
/// items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.index.contains(&item) {
            return false;
        }
        self.index.insert(item.clone());
        self.items.push(item);
        true
    }

    /// Returns whether the item was present.
    pub fn remove(&mut self, item: &str) -> bool {
        if !self.index.remove(item) {
            return false;
        }
        self.items.retain(|existing| existing != item);
        true
    }

    /// Add the item if absent, remove it if present. Returns whether it is now present.
    pub fn toggle(&mut self, item: &str) -> bool {
        if self.remove(item) {
            false
        } else {
            self.insert(item)
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("Garlic"));
        assert!(set.insert("Eggs"));
        assert!(!set.insert("Garlic"));
        assert!(set.insert("garlic"));

        assert_eq!(set.as_slice(), &["Garlic", "Eggs", "garlic"]);
    }

    #[test]
    fn test_remove_and_reinsert_moves_to_end() {
        let mut set: OrderedSet = ["Salt", "Sugar", "Butter"].into_iter().collect();
        assert!(set.remove("Salt"));
        assert!(!set.remove("Salt"));
        assert!(set.insert("Salt"));
        assert_eq!(set.join(", "), "Sugar, Butter, Salt");
    }

    #[test]
    fn test_toggle() {
        let mut set = OrderedSet::new();
        assert!(set.toggle("Wok"));
        assert!(set.contains("Wok"));
        assert!(!set.toggle("Wok"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_collect_deduplicates() {
        let set: OrderedSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
