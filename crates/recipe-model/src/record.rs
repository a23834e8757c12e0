//! Normalized rows and the output record shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::allergen::Allergen;
use crate::numeric::{Numeric, finite};

/// A source row after every column has been decoded into typed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRecipe {
    pub id: i64,
    pub name: Option<String>,
    pub minutes: Option<Numeric>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Decoded nutrition sequence; NaN entries are already `None`.
    pub nutrition: Vec<Option<f64>>,
    pub tags: Vec<String>,
}

/// The four nutrition values kept in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    #[serde(serialize_with = "finite::option")]
    pub calories: Option<f64>,
    #[serde(serialize_with = "finite::option")]
    pub protein: Option<f64>,
    #[serde(serialize_with = "finite::option")]
    pub carbs: Option<f64>,
    #[serde(serialize_with = "finite::option")]
    pub fats: Option<f64>,
}

impl NutritionalInfo {
    /// Named values in output order, for checks that walk every field.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ]
    }
}

/// One element of the output array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub original_id: i64,
    pub name: Option<String>,
    pub cooking_time: Option<Numeric>,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    pub nutritional_info: NutritionalInfo,
    pub dietary_tags: Vec<String>,
    pub allergens: BTreeSet<Allergen>,
}

impl RecipeRecord {
    /// True when either calories or protein is absent; downstream consumers
    /// treat both as required.
    pub fn missing_required_nutrition(&self) -> bool {
        self.nutritional_info.calories.is_none() || self.nutritional_info.protein.is_none()
    }
}
