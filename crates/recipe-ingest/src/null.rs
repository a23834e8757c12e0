//! Cell values that mean "no value" in the source table.

/// Tokens recognized as missing, matched exactly (case and whitespace
/// sensitive), mirroring the conventions of common dataframe CSV readers.
pub const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_null_token(value: &str) -> bool {
    NULL_TOKENS.contains(&value)
}

/// Returns `None` for null tokens, otherwise the owned cell text.
pub fn null_to_none(value: &str) -> Option<String> {
    if is_null_token(value) {
        None
    } else {
        Some(value.to_string())
    }
}
