//! Fixed allergen vocabulary used by the ingredient heuristic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the allergen vocabulary.
///
/// Each variant serializes to the lowercase label that is searched for in
/// ingredient text, so the label doubles as the matching needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Milk,
    Eggs,
    Fish,
    Shellfish,
    #[serde(rename = "tree nuts")]
    TreeNuts,
    Peanuts,
    Wheat,
    Soy,
    Meat,
}

impl Allergen {
    /// The complete vocabulary in detection order.
    pub const ALL: [Allergen; 9] = [
        Allergen::Milk,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Shellfish,
        Allergen::TreeNuts,
        Allergen::Peanuts,
        Allergen::Wheat,
        Allergen::Soy,
        Allergen::Meat,
    ];

    /// Lowercase label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Allergen::Milk => "milk",
            Allergen::Eggs => "eggs",
            Allergen::Fish => "fish",
            Allergen::Shellfish => "shellfish",
            Allergen::TreeNuts => "tree nuts",
            Allergen::Peanuts => "peanuts",
            Allergen::Wheat => "wheat",
            Allergen::Soy => "soy",
            Allergen::Meat => "meat",
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_form() {
        for allergen in Allergen::ALL {
            let json = serde_json::to_string(&allergen).expect("serialize allergen");
            assert_eq!(json, format!("\"{}\"", allergen.label()));
        }
    }

    #[test]
    fn tree_nuts_label_has_a_space() {
        assert_eq!(Allergen::TreeNuts.to_string(), "tree nuts");
        let parsed: Allergen = serde_json::from_str("\"tree nuts\"").expect("parse label");
        assert_eq!(parsed, Allergen::TreeNuts);
    }
}
