pub mod allergen;
pub mod defaults;
pub mod error;
pub mod numeric;
pub mod raw;
pub mod record;

pub use allergen::Allergen;
pub use defaults::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use error::{ModelError, Result};
pub use numeric::Numeric;
pub use raw::{RECIPE_COLUMNS, RawRecipeRow, RecipeColumn};
pub use record::{NormalizedRecipe, NutritionalInfo, RecipeRecord};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = RecipeRecord {
            original_id: 137739,
            name: Some("arriba baked winter squash mexican style".to_string()),
            cooking_time: Some(Numeric::Integer(55)),
            ingredients: vec!["winter squash".to_string(), "butter".to_string()],
            preparation_steps: vec!["make a choice".to_string()],
            nutritional_info: NutritionalInfo {
                calories: Some(51.5),
                protein: Some(0.0),
                carbs: Some(2.0),
                fats: None,
            },
            dietary_tags: vec!["60-minutes-or-less".to_string()],
            allergens: BTreeSet::new(),
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["originalId"], 137739);
        assert_eq!(json["cookingTime"], 55);
        assert_eq!(json["preparationSteps"][0], "make a choice");
        assert_eq!(json["nutritionalInfo"]["protein"], 0.0);
        assert!(json["nutritionalInfo"]["fats"].is_null());
        assert_eq!(json["dietaryTags"][0], "60-minutes-or-less");
        assert_eq!(json["allergens"], serde_json::json!([]));

        let round: RecipeRecord = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn non_finite_values_refuse_to_serialize() {
        let info = NutritionalInfo {
            calories: Some(f64::INFINITY),
            ..NutritionalInfo::default()
        };
        assert!(serde_json::to_string(&info).is_err());
        assert!(serde_json::to_string(&Numeric::Float(f64::NAN)).is_err());
    }
}
