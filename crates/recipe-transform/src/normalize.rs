//! Per-column decoding of raw cells into typed values.

use recipe_ingest::{Literal, parse_literal};
use recipe_model::{NormalizedRecipe, Numeric, RawRecipeRow, RecipeColumn};
use tracing::trace;

use crate::error::{NormalizeError, Result, TransformError};

/// Decode every consumed column of `row`.
pub fn normalize_row(row: &RawRecipeRow) -> Result<NormalizedRecipe> {
    trace!(line = row.line, "normalizing row");
    Ok(NormalizedRecipe {
        id: cell(row, RecipeColumn::Id, parse_id)?,
        name: row.name.clone(),
        minutes: cell(row, RecipeColumn::Minutes, parse_minutes)?,
        ingredients: cell(row, RecipeColumn::Ingredients, decode_string_sequence)?,
        steps: cell(row, RecipeColumn::Steps, decode_string_sequence)?,
        nutrition: cell(row, RecipeColumn::Nutrition, decode_number_sequence)?,
        tags: cell(row, RecipeColumn::Tags, decode_string_sequence)?,
    })
}

fn cell<T>(
    row: &RawRecipeRow,
    column: RecipeColumn,
    decode: impl FnOnce(Option<&str>) -> std::result::Result<T, NormalizeError>,
) -> Result<T> {
    decode(row.get(column)).map_err(|source| TransformError::Row {
        line: row.line,
        column,
        source,
    })
}

/// `id` is required and integral.
pub fn parse_id(value: Option<&str>) -> std::result::Result<i64, NormalizeError> {
    let text = value.ok_or(NormalizeError::MissingId)?;
    text.trim()
        .parse::<i64>()
        .map_err(|_| NormalizeError::InvalidInteger {
            value: text.to_string(),
        })
}

/// Cooking time in minutes; integral text stays integral and NaN is absent.
pub fn parse_minutes(value: Option<&str>) -> std::result::Result<Option<Numeric>, NormalizeError> {
    let Some(text) = value else {
        return Ok(None);
    };
    if let Ok(integer) = text.trim().parse::<i64>() {
        return Ok(Some(Numeric::Integer(integer)));
    }
    match parse_float(text) {
        Some(float) if float.is_nan() => Ok(None),
        Some(float) => Ok(Some(Numeric::Float(float))),
        None => Err(NormalizeError::InvalidNumber {
            value: text.to_string(),
        }),
    }
}

/// Float conversion accepting surrounding whitespace and the `nan`/`inf`
/// spellings.
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Decode a list-of-strings cell; absent cells are empty lists.
pub fn decode_string_sequence(
    value: Option<&str>,
) -> std::result::Result<Vec<String>, NormalizeError> {
    decode_list(value)?
        .into_iter()
        .map(|item| match item {
            Literal::Str(text) => Ok(text),
            other => Err(NormalizeError::UnexpectedLiteral {
                expected: "string",
                found: other.kind(),
            }),
        })
        .collect()
}

/// Decode a list-of-numbers cell; absent cells are empty lists.
///
/// Elements may be numbers or numeric strings. NaN entries become `None`;
/// infinities are kept so the writer can refuse them.
pub fn decode_number_sequence(
    value: Option<&str>,
) -> std::result::Result<Vec<Option<f64>>, NormalizeError> {
    decode_list(value)?
        .into_iter()
        .map(|item| -> std::result::Result<Option<f64>, NormalizeError> {
            let number = match item {
                Literal::Number(number) => number.as_f64(),
                Literal::Str(text) => {
                    parse_float(&text).ok_or(NormalizeError::InvalidNumber { value: text })?
                }
                other @ Literal::List(_) => {
                    return Err(NormalizeError::UnexpectedLiteral {
                        expected: "number",
                        found: other.kind(),
                    });
                }
            };
            Ok((!number.is_nan()).then_some(number))
        })
        .collect()
}

fn decode_list(value: Option<&str>) -> std::result::Result<Vec<Literal>, NormalizeError> {
    let Some(text) = value.filter(|text| !text.is_empty()) else {
        return Ok(Vec::new());
    };
    match parse_literal(text)? {
        Literal::List(items) => Ok(items),
        other => Err(NormalizeError::UnexpectedLiteral {
            expected: "list",
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id(Some("137739")).unwrap(), 137739);
        assert!(matches!(parse_id(None), Err(NormalizeError::MissingId)));
        assert!(matches!(
            parse_id(Some("12.5")),
            Err(NormalizeError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn minutes_keep_their_shape() {
        assert_eq!(parse_minutes(None).unwrap(), None);
        assert_eq!(parse_minutes(Some("55")).unwrap(), Some(Numeric::Integer(55)));
        assert_eq!(parse_minutes(Some("0")).unwrap(), Some(Numeric::Integer(0)));
        assert_eq!(
            parse_minutes(Some("12.5")).unwrap(),
            Some(Numeric::Float(12.5))
        );
        assert_eq!(parse_minutes(Some("NAN")).unwrap(), None);
        assert!(matches!(
            parse_minutes(Some("quick")),
            Err(NormalizeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parse_float_accepts_special_spellings() {
        assert_eq!(parse_float(" 3.5 "), Some(3.5));
        assert!(parse_float("nan").unwrap().is_nan());
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("three"), None);
    }

    #[test]
    fn absent_sequences_are_empty() {
        assert!(decode_string_sequence(None).unwrap().is_empty());
        assert!(decode_string_sequence(Some("")).unwrap().is_empty());
        assert!(decode_number_sequence(None).unwrap().is_empty());
    }

    #[test]
    fn string_sequences_reject_other_shapes() {
        assert!(matches!(
            decode_string_sequence(Some("['a', 2]")),
            Err(NormalizeError::UnexpectedLiteral {
                expected: "string",
                found: "number"
            })
        ));
        assert!(matches!(
            decode_string_sequence(Some("'a'")),
            Err(NormalizeError::UnexpectedLiteral {
                expected: "list",
                ..
            })
        ));
        assert!(matches!(
            decode_string_sequence(Some("['a',")),
            Err(NormalizeError::Literal(_))
        ));
    }

    #[test]
    fn nan_nutrition_becomes_absent() {
        let decoded = decode_number_sequence(Some("[1.5, 'nan', 2, ' 4.0 ', 'inf']")).unwrap();
        assert_eq!(decoded.len(), 5);
        assert_eq!(decoded[0], Some(1.5));
        assert_eq!(decoded[1], None);
        assert_eq!(decoded[2], Some(2.0));
        assert_eq!(decoded[3], Some(4.0));
        assert_eq!(decoded[4], Some(f64::INFINITY));
    }

    #[test]
    fn number_sequences_reject_words_and_nesting() {
        assert!(matches!(
            decode_number_sequence(Some("['lots']")),
            Err(NormalizeError::InvalidNumber { .. })
        ));
        assert!(matches!(
            decode_number_sequence(Some("[[1]]")),
            Err(NormalizeError::UnexpectedLiteral { .. })
        ));
    }

    #[test]
    fn row_errors_carry_line_and_column() {
        let mut row = RawRecipeRow::new(17);
        row.set(RecipeColumn::Id, Some("5".to_string()));
        row.set(RecipeColumn::Steps, Some("['unterminated".to_string()));

        let err = normalize_row(&row).unwrap_err();
        let TransformError::Row { line, column, .. } = err;
        assert_eq!(line, 17);
        assert_eq!(column, RecipeColumn::Steps);
    }
}
