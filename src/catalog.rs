//! Fixed choice tables shown to the user: skill levels, goals, meal types,
//! equipment, the predefined ingredient catalog and pantry staples.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an id does not name any entry of a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {table}: '{id}'")]
pub struct UnknownChoice {
    pub table: &'static str,
    pub id: String,
}

macro_rules! choice_table {
    (
        $(#[$meta:meta])*
        $name:ident, $table:literal {
            $($variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable identifier, used on the command line
            pub fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Human readable label, used in prompts and summaries
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|choice| choice.id() == id)
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_id(s).ok_or_else(|| UnknownChoice {
                    table: $table,
                    id: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_table! {
    /// How comfortable the cook is in the kitchen
    SkillLevel, "skill level" {
        Zero => ("zero", "Zero Experience"),
        Beginner => ("beginner", "Beginner"),
        Intermediate => ("intermediate", "Intermediate"),
    }
}

impl SkillLevel {
    pub fn description(self) -> &'static str {
        match self {
            SkillLevel::Zero => "I can burn water",
            SkillLevel::Beginner => "Can fry an egg",
            SkillLevel::Intermediate => "Can follow recipes",
        }
    }
}

choice_table! {
    /// Today's dietary goal
    Goal, "goal" {
        Normal => ("normal", "Normal"),
        QuickMeal => ("quick", "Quick Meal (< 15 mins)"),
        HighProtein => ("high-protein", "High Protein"),
        ComfortFood => ("comfort", "Comfort Food"),
        LowCalorie => ("low-calorie", "Low Calorie"),
    }
}

choice_table! {
    MealType, "meal type" {
        Breakfast => ("breakfast", "Breakfast"),
        Lunch => ("lunch", "Lunch"),
        Dinner => ("dinner", "Dinner"),
        Drinks => ("drinks", "Drinks"),
        Snack => ("snack", "Snack"),
        Dessert => ("dessert", "Dessert"),
    }
}

pub const EQUIPMENT: &[&str] = &[
    "Rice Cooker",
    "Wok",
    "Air Fryer",
    "Microwave",
    "Stove",
    "Pan",
];

pub const DEFAULT_PANTRY_STAPLES: &[&str] =
    &["Cooking Oil", "Salt", "Black Pepper", "Soy Sauce", "Garlic"];

pub const SUGGESTED_STAPLES: &[&str] = &[
    "Sugar",
    "Sesame Oil",
    "Butter",
    "Ketchup",
    "Chili Sauce",
    "Vinegar",
    "Cornstarch",
];

/// Category of the predefined ingredient catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IngredientCategory {
    #[default]
    Proteins,
    Vegetables,
    Fruits,
    Carbs,
}

impl IngredientCategory {
    pub const ALL: &'static [IngredientCategory] = &[
        IngredientCategory::Proteins,
        IngredientCategory::Vegetables,
        IngredientCategory::Fruits,
        IngredientCategory::Carbs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IngredientCategory::Proteins => "proteins",
            IngredientCategory::Vegetables => "vegetables",
            IngredientCategory::Fruits => "fruits",
            IngredientCategory::Carbs => "carbs",
        }
    }

    pub fn items(self) -> &'static [&'static str] {
        match self {
            IngredientCategory::Proteins => PROTEINS,
            IngredientCategory::Vegetables => VEGETABLES,
            IngredientCategory::Fruits => FRUITS,
            IngredientCategory::Carbs => CARBS,
        }
    }
}

/// Every predefined ingredient, in category order
pub fn all_ingredients() -> impl Iterator<Item = &'static str> {
    IngredientCategory::ALL
        .iter()
        .flat_map(|category| category.items().iter().copied())
}

pub fn is_predefined_ingredient(name: &str) -> bool {
    all_ingredients().any(|item| item == name)
}

const PROTEINS: &[&str] = &[
    // Poultry
    "Chicken Breast",
    "Chicken Thigh",
    "Chicken Wings",
    "Minced Chicken",
    // Pork
    "Minced Pork",
    "Pork Belly",
    "Pork Chop",
    "Pork Ribs",
    // Beef
    "Minced Beef",
    "Beef Steak",
    "Beef Cubes",
    // Seafood
    "Salmon Fillet",
    "Seabass (Barramundi)",
    "Batang (Mackerel)",
    "Prawns (Shrimp)",
    "Squid (Sotong)",
    "Canned Tuna",
    // Plant-based and dairy
    "Eggs",
    "Firm Tofu",
    "Silken Tofu",
    "Tau Kwa",
    "Tempeh",
    "Edamame",
];

const VEGETABLES: &[&str] = &[
    "Bok Choy",
    "Kailan (Chinese Kale)",
    "Chye Sim",
    "Kang Kong",
    "Spinach (Sharp/Round)",
    "Wong Bok (Napa Cabbage)",
    "Broccoli",
    "Cauliflower",
    "Cabbage",
    "Long Beans",
    "French Beans",
    "Lady's Finger (Okra)",
    "Carrot",
    "Potato",
    "Sweet Potato",
    "Radish (Daikon)",
    "Onion (Red/Yellow)",
    "Garlic",
    "Ginger",
    "Spring Onion",
    "Tomato",
    "Cucumber",
    "Capsicum (Bell Pepper)",
    "Corn",
    "Eggplant (Brinjal)",
    // Mushrooms
    "Shiitake Mushroom",
    "Enoki Mushroom",
    "Button Mushroom",
    "Shimeji Mushroom",
];

const FRUITS: &[&str] = &[
    "Apple",
    "Banana",
    "Orange",
    "Lemon",
    "Lime",
    "Mango",
    "Watermelon",
    "Papaya",
    "Dragonfruit",
    "Avocado",
    "Blueberries",
    "Strawberries",
];

const CARBS: &[&str] = &[
    "White Rice",
    "Brown Rice",
    "Bee Hoon (Vermicelli)",
    "Kway Teow",
    "Yellow Noodles",
    "Pasta (Spaghetti/Fusilli)",
    "Instant Noodles",
    "Bread",
    "Udon",
];
