//! Loading of the raw recipe table and decoding of its literal-encoded cells.

pub mod error;
pub mod literal;
pub mod loader;
pub mod null;

pub use error::{IngestError, Result};
pub use literal::{Literal, LiteralError, parse_literal};
pub use loader::{load_recipes, read_recipes};
pub use null::{NULL_TOKENS, is_null_token, null_to_none};
