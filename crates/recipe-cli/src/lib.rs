//! CLI library components for the recipe preprocessor.

pub mod logging;
pub mod pipeline;
