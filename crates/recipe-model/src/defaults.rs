//! Default locations for the batch run, relative to the working directory.

/// Source table read when no input path is given.
pub const DEFAULT_INPUT_PATH: &str = "RAW_recipes.csv";

/// Destination written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "clean_recipes.json";
