use serde::{Deserialize, Serialize};

/// One line of the prep list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    pub name: String,
    /// Quantity including units, e.g. "200 g"
    pub quantity: String,
}

/// A generated recipe, exactly as exchanged between backend and client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Recipe {
    pub title: String,
    /// Estimated total time, e.g. "15 Minutes"
    pub time: String,
    pub ingredients: Vec<Ingredient>,
    /// Items the user needs to buy; empty in strict mode
    pub missing_ingredients: Vec<String>,
    /// Cooking steps; ingredient names may be wrapped in `**`
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let recipe = Recipe {
            title: "Garlic Eggs".to_string(),
            time: "10 Minutes".to_string(),
            ingredients: vec![Ingredient {
                name: "Eggs".to_string(),
                quantity: "2".to_string(),
            }],
            missing_ingredients: vec!["Chives".to_string()],
            steps: vec!["Crack the **Eggs**.".to_string()],
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["missingIngredients"][0], "Chives");
        assert_eq!(json["ingredients"][0]["quantity"], "2");
        assert!(json.get("missing_ingredients").is_none());

        let back: Recipe = serde_json::from_value(json).unwrap();
        assert_eq!(back, recipe);
        assert_eq!(back.ingredient("Eggs").unwrap().quantity, "2");
        assert!(back.ingredient("eggs").is_none());
    }
}
