//! Turns raw recipe rows into output records.
//!
//! The stages are independent and pure:
//!
//! - [`normalize`]: decodes each raw cell into typed values
//! - [`mapper`]: projects a normalized row onto the output record
//! - [`allergen`]: substring heuristic over ingredient text
//!
//! [`transform_rows`] chains them over a whole table.

pub mod allergen;
pub mod error;
pub mod mapper;
pub mod normalize;

use std::time::Instant;

use tracing::{debug, info};

use recipe_model::{RawRecipeRow, RecipeRecord};

pub use allergen::detect_allergens;
pub use error::{NormalizeError, Result, TransformError};
pub use mapper::{map_recipe, map_recipes, nutritional_info};
pub use normalize::{
    decode_number_sequence, decode_string_sequence, normalize_row, parse_float, parse_id,
    parse_minutes,
};

/// Normalize and map every row, preserving order. The first failing row
/// aborts the whole table.
pub fn transform_rows(rows: &[RawRecipeRow]) -> Result<Vec<RecipeRecord>> {
    let start = Instant::now();
    let normalized = rows.iter().map(normalize_row).collect::<Result<Vec<_>>>()?;
    debug!(row_count = normalized.len(), "rows normalized");

    let records = map_recipes(normalized);
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "recipes transformed"
    );
    Ok(records)
}
