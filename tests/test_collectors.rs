use smartcook::collectors::{
    ContextCollector, IngredientSelector, Key, PantryShelf, ProfileSelector, STRICT_INSTRUCTION,
};
use smartcook::{assemble_prompt, CookPage};
use std::cell::RefCell;
use std::rc::Rc;

fn recording<C: ContextCollector>(collector: &mut C) -> Rc<RefCell<Vec<String>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    collector.subscribe(Box::new(move |fragment: &str| {
        sink.borrow_mut().push(fragment.to_string())
    }));
    seen
}

#[test]
fn test_empty_ingredient_selection_is_empty_fragment() {
    let mut selector = IngredientSelector::new();
    let seen = recording(&mut selector);

    for strict in [false, true, false] {
        selector.set_allow_extras(!strict);
        assert_eq!(selector.current_fragment(), "");
    }
    selector.set_query("chick");
    selector.set_input("   ");
    selector.key_down(Key::Enter);
    assert_eq!(selector.current_fragment(), "");

    assert!(seen.borrow().iter().all(String::is_empty));
}

#[test]
fn test_ingredient_fragment_lists_each_item_once_in_order() {
    let items = ["Tofu", "Spinach", "Rice", "My Secret Sauce"];
    let mut selector = IngredientSelector::new();
    for item in items {
        selector.set_input(item);
        selector.key_down(Key::Enter);
    }

    let fragment = selector.current_fragment();
    assert!(fragment.contains("Tofu, Spinach, Rice, My Secret Sauce"));
    for item in items {
        assert_eq!(fragment.matches(item).count(), 1, "{}", item);
    }
    assert!(!fragment.contains(STRICT_INSTRUCTION));

    selector.set_allow_extras(false);
    assert!(selector.current_fragment().contains(STRICT_INSTRUCTION));

    selector.set_allow_extras(true);
    assert!(!selector.current_fragment().contains(STRICT_INSTRUCTION));
}

#[test]
fn test_duplicate_custom_items_kept_once() {
    let mut selector = IngredientSelector::new();
    for _ in 0..2 {
        selector.set_input("Kimchi");
        selector.submit_input();
    }
    assert_eq!(selector.selected().as_slice(), &["Kimchi"]);

    let mut pantry = PantryShelf::new();
    let before = pantry.items().len();
    for _ in 0..2 {
        pantry.set_input(" Fish Sauce ");
        pantry.key_down(Key::Enter);
    }
    assert_eq!(pantry.items().len(), before + 1);
    assert_eq!(pantry.items().iter().filter(|i| *i == "Fish Sauce").count(), 1);

    // Duplicates are exact matches only
    pantry.set_input("fish sauce");
    assert!(pantry.submit_input());
    assert_eq!(pantry.items().len(), before + 2);
}

#[test]
fn test_subscribers_follow_every_change() {
    let mut profile = ProfileSelector::new();
    let seen = recording(&mut profile);

    profile.toggle_equipment("Wok");
    profile.set_requirement("No spicy food");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].contains("- Available Equipment: None"));
    assert!(seen[1].contains("- Available Equipment: Wok"));
    assert!(seen[2].ends_with("- Additional Requirement: No spicy food"));
    assert_eq!(seen[2], profile.current_fragment());
}

#[test]
fn test_empty_pantry_fragment() {
    let mut pantry = PantryShelf::new();
    let staples: Vec<String> = pantry.items().iter().map(str::to_string).collect();
    for item in &staples {
        pantry.remove(item);
    }
    assert_eq!(pantry.current_fragment(), "No Pantry Items Available.");
}

#[test]
fn test_assembly_is_pure() {
    let mut page = CookPage::new();
    page.ingredients_mut().toggle("Eggs");
    page.profile_mut().toggle_equipment("Air Fryer");

    let fragments = page.fragments();
    let first = assemble_prompt(&fragments);
    let second = assemble_prompt(&fragments);
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(page.fragments(), fragments);
}
