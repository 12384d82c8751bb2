//! Static weekly meal plan, recipes, and shopping list.
//!
//! Fixed reference data; the plan repeats weekly and is not persisted.

use serde::Serialize;

/// One day of the weekly meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealPlanDay {
    pub day: &'static str,
    pub breakfast: &'static str,
    pub meal1: &'static str,
    pub meal2: &'static str,
}

/// A named recipe with preparation instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: &'static str,
    pub instructions: &'static str,
}

const WEEKLY_MEAL_PLAN: [MealPlanDay; 7] = [
    MealPlanDay {
        day: "Monday",
        breakfast: "Protein oatmeal",
        meal1: "Lean chili con carne",
        meal2: "Chicken curry",
    },
    MealPlanDay {
        day: "Tuesday",
        breakfast: "Eggs with toast",
        meal1: "Chicken curry",
        meal2: "Tuna fishcakes",
    },
    MealPlanDay {
        day: "Wednesday",
        breakfast: "Protein oatmeal",
        meal1: "Lean chili con carne",
        meal2: "Stir-fry",
    },
    MealPlanDay {
        day: "Thursday",
        breakfast: "Eggs with toast",
        meal1: "Tuna fishcakes",
        meal2: "Chicken curry",
    },
    MealPlanDay {
        day: "Friday",
        breakfast: "Protein oatmeal",
        meal1: "Lean chili con carne",
        meal2: "Stir-fry",
    },
    MealPlanDay {
        day: "Saturday",
        breakfast: "Eggs with toast",
        meal1: "Stir-fry",
        meal2: "Lean chili con carne",
    },
    MealPlanDay {
        day: "Sunday",
        breakfast: "Protein oatmeal",
        meal1: "Tuna fishcakes",
        meal2: "Lean chili con carne",
    },
];

const RECIPES: [Recipe; 6] = [
    Recipe {
        name: "Lean chili con carne",
        instructions: "Brown lean minced beef in a pot. Add chopped onion, garlic, chili powder, cumin and paprika. Add canned tomatoes and mixed beans. Simmer for 20-30 minutes until flavours meld.",
    },
    Recipe {
        name: "Chicken curry",
        instructions: "Saut\u{e9} onions, garlic and ginger. Add diced chicken and curry powder or paste and cook until browned. Add canned tomatoes and vegetables; simmer until chicken is cooked. Stir in yogurt or coconut milk to finish.",
    },
    Recipe {
        name: "Tuna fishcakes",
        instructions: "Boil and mash potatoes. Mix with drained canned tuna, sweetcorn and herbs. Form patties, coat with breadcrumbs and pan-fry until golden.",
    },
    Recipe {
        name: "Stir-fry",
        instructions: "Heat oil in a wok. Add sliced meat (chicken or beef) and cook until browned. Add mixed vegetables, soy sauce and seasonings. Stir continuously until vegetables are tender.",
    },
    Recipe {
        name: "Protein oatmeal",
        instructions: "Cook rolled oats with water or milk until creamy. Stir in a scoop of protein powder and top with fruit such as banana or berries.",
    },
    Recipe {
        name: "Eggs with toast",
        instructions: "Boil, scramble or fry eggs to your liking. Serve with wholegrain toast and optional vegetables.",
    },
];

const SHOPPING_LIST: [&str; 15] = [
    "Rolled oats (1 kg)",
    "Eggs (12)",
    "Chicken thighs or breast (1 kg)",
    "Lean minced beef (500 g)",
    "Canned tuna (4 tins)",
    "Chopped tomatoes (2 tins)",
    "Mixed beans (2 tins)",
    "Sweetcorn (1 tin)",
    "Frozen mixed vegetables (1 kg)",
    "Brown rice (1 kg)",
    "Greek yogurt (500 g)",
    "Wholegrain bread (1 loaf)",
    "Bananas and seasonal fruit",
    "Onions, garlic and ginger",
    "Chili powder, cumin, curry powder or paste",
];

/// The seven-day meal plan, Monday first.
pub fn weekly_meal_plan() -> &'static [MealPlanDay] {
    &WEEKLY_MEAL_PLAN
}

/// Look up a recipe by name (case-insensitive).
pub fn recipe(name: &str) -> Option<&'static Recipe> {
    RECIPES
        .iter()
        .find(|recipe| recipe.name.eq_ignore_ascii_case(name.trim()))
}

/// All known recipes.
pub fn recipes() -> &'static [Recipe] {
    &RECIPES
}

/// The weekly shopping list.
pub fn shopping_list() -> &'static [&'static str] {
    &SHOPPING_LIST
}
