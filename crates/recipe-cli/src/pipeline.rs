//! Pipeline stages for one batch run: load, transform, write.
//!
//! Each stage runs inside its own span so logs group by stage. Any stage
//! error ends the run; nothing is retried.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use recipe_ingest::load_recipes;
use recipe_model::{Allergen, RawRecipeRow, RecipeRecord};
use recipe_output::{WriteOptions, write_records};
use recipe_transform::transform_rows;

/// Inputs for a batch run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub write: WriteOptions,
}

/// Counts describing the written records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStats {
    pub records: usize,
    pub missing_cooking_time: usize,
    /// Records lacking calories or protein.
    pub missing_required_nutrition: usize,
    pub with_allergens: usize,
    pub allergen_counts: BTreeMap<Allergen, usize>,
    pub mean_cooking_time: Option<f64>,
}

impl RecipeStats {
    pub fn from_records(records: &[RecipeRecord]) -> Self {
        let mut stats = Self {
            records: records.len(),
            ..Self::default()
        };
        let mut cooking_total = 0.0;
        let mut cooking_count = 0usize;
        for record in records {
            match record.cooking_time {
                Some(minutes) => {
                    cooking_total += minutes.as_f64();
                    cooking_count += 1;
                }
                None => stats.missing_cooking_time += 1,
            }
            if record.missing_required_nutrition() {
                stats.missing_required_nutrition += 1;
            }
            if !record.allergens.is_empty() {
                stats.with_allergens += 1;
            }
            for allergen in &record.allergens {
                *stats.allergen_counts.entry(*allergen).or_insert(0) += 1;
            }
        }
        if cooking_count > 0 {
            stats.mean_cooking_time = Some(cooking_total / cooking_count as f64);
        }
        stats
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: RecipeStats,
}

/// Stage 1: read the source table.
pub fn ingest(path: &Path) -> Result<Vec<RawRecipeRow>> {
    let span = info_span!("load", path = %path.display());
    span.in_scope(|| load_recipes(path).with_context(|| format!("load {}", path.display())))
}

/// Stage 2: normalize and map every row.
pub fn transform(rows: &[RawRecipeRow]) -> Result<Vec<RecipeRecord>> {
    let span = info_span!("transform", row_count = rows.len());
    span.in_scope(|| transform_rows(rows).context("transform recipes"))
}

/// Stage 3: write the JSON array.
pub fn output(records: &[RecipeRecord], path: &Path, options: WriteOptions) -> Result<usize> {
    let span = info_span!("write", path = %path.display());
    span.in_scope(|| {
        write_records(records, path, options).with_context(|| format!("write {}", path.display()))
    })
}

/// Run the whole batch: load, transform, write.
pub fn run_pipeline(options: &PipelineOptions) -> Result<RunResult> {
    let start = Instant::now();

    let rows = ingest(&options.input)?;
    let records = transform(&rows)?;
    drop(rows);
    output(&records, &options.output, options.write)?;

    let stats = RecipeStats::from_records(&records);
    if stats.missing_required_nutrition > 0 {
        warn!(
            count = stats.missing_required_nutrition,
            "recipes missing calories or protein"
        );
    }
    info!(
        input = %options.input.display(),
        output = %options.output.display(),
        record_count = stats.records,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: options.input.clone(),
        output: options.output.clone(),
        stats,
    })
}
