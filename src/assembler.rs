/// Opening line of every generation prompt
pub const PROMPT_HEADER: &str = "Generate a recipe that fulfills user requirement:";

/// Closing line of every generation prompt
pub const PROMPT_FOOTER: &str = "You don't have to use all the ingredients provided.";

/// The three context fragments, as last emitted by their collectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFragments {
    pub profile: String,
    pub ingredients: String,
    pub pantry: String,
}

/// Build the prompt sent to the backend.
///
/// Empty fragments are left out. The result depends only on the fragments.
pub fn assemble_prompt(fragments: &ContextFragments) -> String {
    let mut prompt = String::with_capacity(
        PROMPT_HEADER.len()
            + fragments.profile.len()
            + fragments.ingredients.len()
            + fragments.pantry.len()
            + PROMPT_FOOTER.len()
            + 8,
    );

    prompt.push_str(PROMPT_HEADER);
    prompt.push('\n');

    for section in [
        &fragments.profile,
        &fragments.ingredients,
        &fragments.pantry,
    ] {
        if !section.is_empty() {
            prompt.push_str(section);
            prompt.push('\n');
        }
    }

    prompt.push('\n');
    prompt.push_str(PROMPT_FOOTER);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> ContextFragments {
        ContextFragments {
            profile: "- Cooking Skill: Beginner".to_string(),
            ingredients: "AVAILABLE INGREDIENTS:\nEggs".to_string(),
            pantry: "Available Pantry Items: Salt".to_string(),
        }
    }

    #[test]
    fn test_prompt_layout() {
        assert_eq!(
            assemble_prompt(&fragments()),
            "Generate a recipe that fulfills user requirement:\n\
             - Cooking Skill: Beginner\n\
             AVAILABLE INGREDIENTS:\nEggs\n\
             Available Pantry Items: Salt\n\
             \n\
             You don't have to use all the ingredients provided."
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let input = fragments();
        assert_eq!(assemble_prompt(&input), assemble_prompt(&input.clone()));
    }

    #[test]
    fn test_empty_fragment_is_omitted() {
        let input = ContextFragments {
            ingredients: String::new(),
            ..fragments()
        };
        let prompt = assemble_prompt(&input);
        assert!(!prompt.contains("AVAILABLE INGREDIENTS"));
        assert!(!prompt.contains("\n\n\n"));
        assert!(prompt.starts_with(PROMPT_HEADER));
        assert!(prompt.ends_with(PROMPT_FOOTER));
    }
}
