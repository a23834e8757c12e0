//! Atomic JSON array writer.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use recipe_model::RecipeRecord;
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::finite::ensure_finite;

/// Formatting options for the output document.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Indent the array instead of writing it on one line.
    pub pretty: bool,
}

/// Sibling path the document is staged in before being renamed into place.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `records` as one JSON array into `writer`.
pub fn write_records_to<W: Write>(
    records: &[RecipeRecord],
    writer: W,
    options: WriteOptions,
) -> Result<()> {
    ensure_finite(records)?;
    let result = if options.pretty {
        serde_json::to_writer_pretty(writer, records)
    } else {
        serde_json::to_writer(writer, records)
    };
    result.map_err(|source| OutputError::Serialize { source })
}

/// Write `records` to `path`, returning the number of records written.
///
/// The array is written to [`temp_path`] and renamed over `path` once it is
/// flushed and synced; on failure the temp file is removed and `path` is left
/// as it was.
pub fn write_records(records: &[RecipeRecord], path: &Path, options: WriteOptions) -> Result<usize> {
    let start = Instant::now();
    ensure_finite(records)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let staged = temp_path(path);
    if let Err(error) = stage(records, &staged, options) {
        let _ = fs::remove_file(&staged);
        return Err(error);
    }
    debug!(path = %staged.display(), "staged output");

    fs::rename(&staged, path).map_err(|e| {
        let _ = fs::remove_file(&staged);
        OutputError::AtomicWriteFailed {
            temp_path: staged.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!(
        path = %path.display(),
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "recipes written"
    );
    Ok(records.len())
}

fn stage(records: &[RecipeRecord], staged: &Path, options: WriteOptions) -> Result<()> {
    let file = File::create(staged).map_err(|e| OutputError::Io {
        operation: "create",
        path: staged.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_records_to(records, &mut writer, options)?;

    let file = writer.into_inner().map_err(|e| OutputError::Io {
        operation: "write",
        path: staged.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: staged.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("out/clean_recipes.json")),
            PathBuf::from("out/clean_recipes.json.tmp")
        );
        assert_eq!(
            temp_path(Path::new("clean_recipes.json")),
            PathBuf::from("clean_recipes.json.tmp")
        );
    }

    #[test]
    fn empty_input_writes_empty_array() {
        let mut buffer = Vec::new();
        write_records_to(&[], &mut buffer, WriteOptions::default()).unwrap();
        assert_eq!(buffer, b"[]");
    }
}
