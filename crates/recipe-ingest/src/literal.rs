//! Decoder for the literal syntax used in list-valued cells.
//!
//! Cells such as `ingredients` hold text like `['salt', "cook's choice"]`.
//! The decoder accepts lists, quoted strings and numbers and nothing else.
//! Nothing in a cell is ever evaluated.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::CharIndices;

use recipe_model::Numeric;
use thiserror::Error;

/// Maximum list nesting accepted before the decoder gives up.
pub const MAX_DEPTH: usize = 64;

/// A decoded cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(Numeric),
    List(Vec<Literal>),
}

impl Literal {
    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "string",
            Literal::Number(_) => "number",
            Literal::List(_) => "list",
        }
    }
}

/// Errors raised for malformed literal text. Offsets are byte offsets into
/// the cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected character {found:?} at offset {offset}, expected {expected}")]
    UnexpectedChar {
        found: char,
        offset: usize,
        expected: &'static str,
    },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape at offset {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: String },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("lists nested deeper than {max} levels at offset {offset}", max = MAX_DEPTH)]
    TooDeep { offset: usize },
}

type Result<T> = std::result::Result<T, LiteralError>;

/// Decode one literal value from `text`.
///
/// Surrounding whitespace is ignored; anything after the value is an error.
pub fn parse_literal(text: &str) -> Result<Literal> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(LiteralError::Empty);
    }
    let value = parser.value(0)?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(LiteralError::TrailingInput {
            offset: parser.offset(),
        });
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.text.len(), |&(idx, _)| idx)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.chars.next();
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal> {
        let offset = self.offset();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd {
                expected: "a value",
            }),
            Some('[') => self.list(depth),
            Some('\'' | '"') => self.string().map(Literal::Str),
            Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {
                self.number().map(Literal::Number)
            }
            Some(found) => Err(LiteralError::UnexpectedChar {
                found,
                offset,
                expected: "a list, string or number",
            }),
        }
    }

    fn list(&mut self, depth: usize) -> Result<Literal> {
        if depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep {
                offset: self.offset(),
            });
        }
        self.chars.next();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.chars.next();
                return Ok(Literal::List(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => {}
                Some((_, ']')) => return Ok(Literal::List(items)),
                Some((offset, found)) => {
                    return Err(LiteralError::UnexpectedChar {
                        found,
                        offset,
                        expected: "',' or ']'",
                    });
                }
                None => {
                    return Err(LiteralError::UnexpectedEnd {
                        expected: "',' or ']'",
                    });
                }
            }
        }
    }

    /// One string value; adjacent quoted pieces concatenate.
    fn string(&mut self) -> Result<String> {
        let mut out = String::new();
        self.quoted(&mut out)?;
        loop {
            let checkpoint = self.chars.clone();
            self.skip_whitespace();
            if matches!(self.peek(), Some('\'' | '"')) {
                self.quoted(&mut out)?;
            } else {
                self.chars = checkpoint;
                return Ok(out);
            }
        }
    }

    fn quoted(&mut self, out: &mut String) -> Result<()> {
        let Some((start, quote)) = self.chars.next() else {
            return Err(LiteralError::UnexpectedEnd {
                expected: "a string",
            });
        };
        loop {
            match self.chars.next() {
                None | Some((_, '\n')) => {
                    return Err(LiteralError::UnterminatedString { offset: start });
                }
                Some((_, c)) if c == quote => return Ok(()),
                Some((offset, '\\')) => self.escape(start, offset, out)?,
                Some((_, c)) => out.push(c),
            }
        }
    }

    fn escape(&mut self, start: usize, offset: usize, out: &mut String) -> Result<()> {
        let Some((_, c)) = self.chars.next() else {
            return Err(LiteralError::UnterminatedString { offset: start });
        };
        match c {
            // line continuation
            '\n' => {}
            '\\' | '\'' | '"' => out.push(c),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'v' => out.push('\u{0b}'),
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match self.peek().and_then(|next| next.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            self.chars.next();
                        }
                        None => break,
                    }
                }
                out.push(code_point(code, offset)?);
            }
            'x' => out.push(self.hex_escape(offset, 2)?),
            'u' => out.push(self.hex_escape(offset, 4)?),
            'U' => out.push(self.hex_escape(offset, 8)?),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, offset: usize, len: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..len {
            let digit = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| LiteralError::InvalidEscape {
                    offset,
                    reason: format!("expected {len} hex digits"),
                })?;
            self.chars.next();
            code = code * 16 + digit;
        }
        code_point(code, offset)
    }

    fn number(&mut self) -> Result<Numeric> {
        let offset = self.offset();
        let mut text = String::new();
        let mut is_float = false;

        if let Some(sign @ ('+' | '-')) = self.peek() {
            text.push(sign);
            self.chars.next();
        }
        let int_digits = self.digits(&mut text, offset)?;
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            is_float = true;
            text.push('.');
            self.chars.next();
            frac_digits = self.digits(&mut text, offset)?;
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(LiteralError::InvalidNumber { offset, text });
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            text.push('e');
            self.chars.next();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.chars.next();
            }
            if self.digits(&mut text, offset)? == 0 {
                return Err(LiteralError::InvalidNumber { offset, text });
            }
        }

        if !is_float && has_leading_zero(&text) {
            return Err(LiteralError::InvalidNumber { offset, text });
        }
        if !is_float && let Ok(value) = text.parse::<i64>() {
            return Ok(Numeric::Integer(value));
        }
        // Integers too wide for i64 degrade to floats.
        text.parse::<f64>()
            .map(Numeric::Float)
            .map_err(|_| LiteralError::InvalidNumber { offset, text })
    }

    /// Consume a digit run (with single `_` separators), returning the digit
    /// count.
    fn digits(&mut self, text: &mut String, offset: usize) -> Result<usize> {
        let mut count = 0;
        let mut after_underscore = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                count += 1;
                after_underscore = false;
            } else if c == '_' && count > 0 && !after_underscore {
                after_underscore = true;
            } else {
                break;
            }
            self.chars.next();
        }
        if after_underscore {
            text.push('_');
            return Err(LiteralError::InvalidNumber {
                offset,
                text: text.clone(),
            });
        }
        Ok(count)
    }
}

/// Decimal integers may not start with `0` unless every digit is zero.
/// Floats such as `007.5` are fine.
fn has_leading_zero(text: &str) -> bool {
    let digits = text.trim_start_matches(['+', '-']);
    digits.len() > 1 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0')
}

fn code_point(code: u32, offset: usize) -> Result<char> {
    char::from_u32(code).ok_or_else(|| LiteralError::InvalidEscape {
        offset,
        reason: format!("code point {code:#x} is not a valid character"),
    })
}

impl fmt::Display for Literal {
    /// Canonical literal text; decoding it yields the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(value) => write_quoted(f, value),
            Literal::Number(Numeric::Integer(value)) => write!(f, "{value}"),
            Literal::Number(Numeric::Float(value)) => write!(f, "{value:?}"),
            Literal::List(items) => {
                f.write_char('[')?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(values: &[&str]) -> Literal {
        Literal::List(values.iter().map(|v| Literal::Str((*v).to_string())).collect())
    }

    #[test]
    fn parses_string_lists() {
        let parsed = parse_literal("['winter squash', 'mexican seasoning']").unwrap();
        assert_eq!(parsed, strs(&["winter squash", "mexican seasoning"]));
    }

    #[test]
    fn parses_mixed_quotes_and_escapes() {
        let parsed = parse_literal(r#"["cook's choice", 'say \'hi\'', 'tab\there', 'caf\xe9']"#)
            .unwrap();
        assert_eq!(
            parsed,
            strs(&["cook's choice", "say 'hi'", "tab\there", "café"])
        );
    }

    #[test]
    fn parses_unicode_and_octal_escapes() {
        let parsed = parse_literal(r"['é\U0001F600\101']").unwrap();
        assert_eq!(parsed, strs(&["é\u{1F600}A"]));
    }

    #[test]
    fn unknown_escape_keeps_backslash() {
        let parsed = parse_literal(r"['1\2 cup', 'a\qb']").unwrap();
        assert_eq!(parsed, strs(&["1\u{2} cup", "a\\qb"]));
    }

    #[test]
    fn adjacent_strings_concatenate() {
        assert_eq!(
            parse_literal("['half' \"-and-\" 'half']").unwrap(),
            strs(&["half-and-half"])
        );
    }

    #[test]
    fn parses_numbers() {
        let parsed = parse_literal("[138.4, 10, -3.0, +2, .5, 1e3, 1_000, 5.]").unwrap();
        assert_eq!(
            parsed,
            Literal::List(vec![
                Literal::Number(Numeric::Float(138.4)),
                Literal::Number(Numeric::Integer(10)),
                Literal::Number(Numeric::Float(-3.0)),
                Literal::Number(Numeric::Integer(2)),
                Literal::Number(Numeric::Float(0.5)),
                Literal::Number(Numeric::Float(1000.0)),
                Literal::Number(Numeric::Integer(1000)),
                Literal::Number(Numeric::Float(5.0)),
            ])
        );
    }

    #[test]
    fn leading_zeros_only_on_zero_integers() {
        assert!(matches!(
            parse_literal("[007]"),
            Err(LiteralError::InvalidNumber { offset: 1, .. })
        ));
        assert!(matches!(
            parse_literal("-0_1"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert_eq!(
            parse_literal("[00, 0_0, 007.5, 0]").unwrap(),
            Literal::List(vec![
                Literal::Number(Numeric::Integer(0)),
                Literal::Number(Numeric::Integer(0)),
                Literal::Number(Numeric::Float(7.5)),
                Literal::Number(Numeric::Integer(0)),
            ])
        );
    }

    #[test]
    fn wide_integers_become_floats() {
        let parsed = parse_literal("123456789012345678901234567890").unwrap();
        assert!(matches!(parsed, Literal::Number(Numeric::Float(_))));
    }

    #[test]
    fn empty_and_trailing_commas() {
        assert_eq!(parse_literal("[]").unwrap(), Literal::List(vec![]));
        assert_eq!(parse_literal(" [ 'a' , ] ").unwrap(), strs(&["a"]));
        assert_eq!(
            parse_literal("[[1], []]").unwrap(),
            Literal::List(vec![
                Literal::List(vec![Literal::Number(Numeric::Integer(1))]),
                Literal::List(vec![]),
            ])
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_literal("   "), Err(LiteralError::Empty));
        assert!(matches!(
            parse_literal("['a'"),
            Err(LiteralError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse_literal("['a"),
            Err(LiteralError::UnterminatedString { offset: 1 })
        ));
        assert!(matches!(
            parse_literal("['a' 'b' 3]"),
            Err(LiteralError::UnexpectedChar { found: '3', .. })
        ));
        assert!(matches!(
            parse_literal("[,]"),
            Err(LiteralError::UnexpectedChar { found: ',', .. })
        ));
        assert!(matches!(
            parse_literal("['a'] x"),
            Err(LiteralError::TrailingInput { offset: 6 })
        ));
        assert!(matches!(
            parse_literal("[1__0]"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_literal("[1e]"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_literal(r"['\x4']"),
            Err(LiteralError::InvalidEscape { .. })
        ));
        assert!(matches!(
            parse_literal(r"['\ud800']"),
            Err(LiteralError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn refuses_anything_executable() {
        for text in [
            "__import__('os').system('true')",
            "[x for x in range(3)]",
            "{'a': 1}",
            "None",
            "nan",
        ] {
            assert!(parse_literal(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            parse_literal(&deep),
            Err(LiteralError::TooDeep { .. })
        ));
        let ok = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(parse_literal(&ok).is_ok());
    }

    #[test]
    fn display_picks_quotes_like_the_source_format() {
        assert_eq!(strs(&["plain"]).to_string(), "['plain']");
        assert_eq!(strs(&["cook's"]).to_string(), "[\"cook's\"]");
        assert_eq!(strs(&["both ' and \""]).to_string(), r#"['both \' and "']"#);
        assert_eq!(strs(&["a\\b\n"]).to_string(), r"['a\\b\n']");
        assert_eq!(
            Literal::List(vec![
                Literal::Number(Numeric::Float(3.0)),
                Literal::Number(Numeric::Integer(7)),
            ])
            .to_string(),
            "[3.0, 7]"
        );
    }
}
