//! Rows as they come out of the source table.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Source columns consumed by the pipeline. All other columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeColumn {
    Id,
    Name,
    Minutes,
    Ingredients,
    Steps,
    Nutrition,
    Tags,
}

/// Every consumed column, in source order.
pub const RECIPE_COLUMNS: [RecipeColumn; 7] = [
    RecipeColumn::Id,
    RecipeColumn::Name,
    RecipeColumn::Minutes,
    RecipeColumn::Ingredients,
    RecipeColumn::Steps,
    RecipeColumn::Nutrition,
    RecipeColumn::Tags,
];

impl RecipeColumn {
    /// Header name in the source table.
    pub fn header(self) -> &'static str {
        match self {
            RecipeColumn::Id => "id",
            RecipeColumn::Name => "name",
            RecipeColumn::Minutes => "minutes",
            RecipeColumn::Ingredients => "ingredients",
            RecipeColumn::Steps => "steps",
            RecipeColumn::Nutrition => "nutrition",
            RecipeColumn::Tags => "tags",
        }
    }
}

impl fmt::Display for RecipeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for RecipeColumn {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        RECIPE_COLUMNS
            .into_iter()
            .find(|column| column.header() == value)
            .ok_or_else(|| ModelError::UnknownColumn(value.to_string()))
    }
}

/// One source row restricted to the consumed columns.
///
/// `None` marks an empty cell or a null token; the text is otherwise
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecipeRow {
    /// 1-based line of the record in the source file (header is line 1).
    pub line: u64,
    pub id: Option<String>,
    pub name: Option<String>,
    pub minutes: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub nutrition: Option<String>,
    pub tags: Option<String>,
}

impl RawRecipeRow {
    pub fn new(line: u64) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    pub fn get(&self, column: RecipeColumn) -> Option<&str> {
        self.slot(column).as_deref()
    }

    pub fn set(&mut self, column: RecipeColumn, value: Option<String>) {
        *self.slot_mut(column) = value;
    }

    fn slot(&self, column: RecipeColumn) -> &Option<String> {
        match column {
            RecipeColumn::Id => &self.id,
            RecipeColumn::Name => &self.name,
            RecipeColumn::Minutes => &self.minutes,
            RecipeColumn::Ingredients => &self.ingredients,
            RecipeColumn::Steps => &self.steps,
            RecipeColumn::Nutrition => &self.nutrition,
            RecipeColumn::Tags => &self.tags,
        }
    }

    fn slot_mut(&mut self, column: RecipeColumn) -> &mut Option<String> {
        match column {
            RecipeColumn::Id => &mut self.id,
            RecipeColumn::Name => &mut self.name,
            RecipeColumn::Minutes => &mut self.minutes,
            RecipeColumn::Ingredients => &mut self.ingredients,
            RecipeColumn::Steps => &mut self.steps,
            RecipeColumn::Nutrition => &mut self.nutrition,
            RecipeColumn::Tags => &mut self.tags,
        }
    }
}
