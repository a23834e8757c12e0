//! Projection of normalized rows onto the output record.

use recipe_model::{NormalizedRecipe, NutritionalInfo, RecipeRecord};

use crate::allergen::detect_allergens;

const CALORIES_INDEX: usize = 0;
const PROTEIN_INDEX: usize = 3;
const CARBS_INDEX: usize = 4;
const FATS_INDEX: usize = 5;

/// Build the output record for one normalized row.
pub fn map_recipe(recipe: NormalizedRecipe) -> RecipeRecord {
    let allergens = detect_allergens(&recipe.ingredients);
    RecipeRecord {
        original_id: recipe.id,
        name: recipe.name,
        cooking_time: recipe.minutes,
        nutritional_info: nutritional_info(&recipe.nutrition),
        ingredients: recipe.ingredients,
        preparation_steps: recipe.steps,
        dietary_tags: recipe.tags,
        allergens,
    }
}

pub fn map_recipes(recipes: Vec<NormalizedRecipe>) -> Vec<RecipeRecord> {
    recipes.into_iter().map(map_recipe).collect()
}

/// Pick the kept values by position. A sequence too short for a position
/// leaves that field absent.
pub fn nutritional_info(nutrition: &[Option<f64>]) -> NutritionalInfo {
    let at = |index: usize| nutrition.get(index).copied().flatten();
    NutritionalInfo {
        calories: at(CALORIES_INDEX),
        protein: at(PROTEIN_INDEX),
        carbs: at(CARBS_INDEX),
        fats: at(FATS_INDEX),
    }
}
