//! CSV loading restricted to the recipe columns.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use recipe_model::{RECIPE_COLUMNS, RawRecipeRow, RecipeColumn};

use crate::error::{IngestError, Result};
use crate::null::null_to_none;

/// Load every row of the recipe table at `path` into memory.
pub fn load_recipes(path: &Path) -> Result<Vec<RawRecipeRow>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_recipes(file, path)
}

/// Read the recipe table from any reader. `path` is only used in errors and
/// logs.
///
/// Columns are located by header name; extra columns are skipped and rows
/// shorter than the header yield `None` for the missing cells. A row longer
/// than the header is an error.
pub fn read_recipes<R: Read>(reader: R, path: &Path) -> Result<Vec<RawRecipeRow>> {
    let start = Instant::now();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let positions = column_positions(&headers, path)?;
    debug!(
        path = %path.display(),
        header_count = headers.len(),
        "located recipe columns"
    );

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map_or(index as u64 + 2, csv::Position::line);
        if record.len() > headers.len() {
            return Err(IngestError::FieldCount {
                line,
                expected: headers.len(),
                found: record.len(),
                path: path.to_path_buf(),
            });
        }
        let mut row = RawRecipeRow::new(line);
        for (column, position) in &positions {
            let cell = record.get(*position).map(normalize_cell);
            row.set(*column, cell.and_then(null_to_none));
        }
        rows.push(row);
    }

    info!(
        path = %path.display(),
        row_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "recipe table loaded"
    );
    Ok(rows)
}

fn column_positions(headers: &StringRecord, path: &Path) -> Result<Vec<(RecipeColumn, usize)>> {
    let mut found: HashMap<RecipeColumn, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        if let Ok(column) = normalize_header(header).parse::<RecipeColumn>() {
            // first occurrence wins for duplicated headers
            found.entry(column).or_insert(idx);
        }
    }
    RECIPE_COLUMNS
        .into_iter()
        .map(|column| {
            found
                .get(&column)
                .map(|&idx| (column, idx))
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.header(),
                    path: path.to_path_buf(),
                })
        })
        .collect()
}

fn normalize_header(raw: &str) -> &str {
    raw.trim_matches('\u{feff}').trim()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}')
}
