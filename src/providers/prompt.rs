/// The system prompt sent with every recipe generation request.
///
/// Loaded from `prompt.txt` at compile time.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!RECIPE_SYSTEM_PROMPT.is_empty());
        assert!(RECIPE_SYSTEM_PROMPT.contains("missingIngredients"));
        assert!(RECIPE_SYSTEM_PROMPT.contains("double stars"));
    }

    #[test]
    fn test_prompt_contains_example() {
        assert!(RECIPE_SYSTEM_PROMPT.contains("**Chicken Breast**"));
        assert!(RECIPE_SYSTEM_PROMPT.contains("15 Minutes"));
    }
}
