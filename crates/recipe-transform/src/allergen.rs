//! Allergen tagging by case-insensitive substring search.
//!
//! This is a coarse heuristic: "meatless" matches meat and "shellfish" also
//! matches fish.

use std::collections::BTreeSet;

use recipe_model::Allergen;

/// Collect every vocabulary term that occurs in any ingredient.
pub fn detect_allergens<S: AsRef<str>>(ingredients: &[S]) -> BTreeSet<Allergen> {
    let mut found = BTreeSet::new();
    for ingredient in ingredients {
        let lowered = ingredient.as_ref().to_lowercase();
        for allergen in Allergen::ALL {
            if lowered.contains(allergen.label()) {
                found.insert(allergen);
            }
        }
    }
    found
}
