use recipe_model::{Numeric, RecipeRecord};

use crate::error::{OutputError, Result};

/// Fail on the first record holding a non-finite number.
pub fn ensure_finite(records: &[RecipeRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let cooking_time = record.cooking_time.map(Numeric::as_f64);
        let fields = std::iter::once(("cookingTime", cooking_time))
            .chain(record.nutritional_info.fields());
        for (field, value) in fields {
            if let Some(value) = value.filter(|value| !value.is_finite()) {
                return Err(OutputError::NonFinite {
                    index,
                    original_id: record.original_id,
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}
