//! Boolean conversions.
//!
//! Text is first looked up in a small token table (`0`/`1`, `yes`/`no` and
//! the Chinese `是`/`否`). Only if no token matches is it parsed as a
//! `true`/`false` literal. The order matters: `"1"` never reaches the literal
//! parser and `"True"` never matches a token.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::convert::{or_default, stringify};
use crate::error::ConvertError;
use crate::model::Value;

lazy_static! {
    static ref BOOL_TOKENS: FxHashMap<&'static str, bool> = {
        let mut tokens = FxHashMap::default();
        tokens.insert("0", false);
        tokens.insert("1", true);
        tokens.insert("是", true);
        tokens.insert("否", false);
        tokens.insert("yes", true);
        tokens.insert("no", false);
        tokens
    };
}

/// Looks `text` up in the token table, trimmed and lower-cased.
///
/// `None` means "no match", not false.
pub(crate) fn match_bool_token(text: &str) -> Option<bool> {
    let token = text.trim().to_lowercase();
    BOOL_TOKENS.get(token.as_str()).copied()
}

/// Parses `true` or `false`, ignoring ASCII case and surrounding whitespace.
fn parse_bool_literal(text: &str) -> Result<bool, ConvertError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConvertError::InvalidBool { text: trimmed.to_string() })
    }
}

/// Strictly converts to `bool`: token table first, then literal.
pub fn try_to_bool<'a>(data: impl Into<Value<'a>>) -> Result<bool, ConvertError> {
    match data.into() {
        Value::Null => Err(ConvertError::Absent),
        Value::Bool(v) => Ok(v),
        other => {
            let text = stringify(&other);
            match match_bool_token(&text) {
                Some(v) => Ok(v),
                None => parse_bool_literal(&text),
            }
        }
    }
}

/// Converts to `bool`, or `None` when absent or unrecognized.
pub fn to_bool_or_null<'a>(data: impl Into<Value<'a>>) -> Option<bool> {
    try_to_bool(data).ok()
}

/// Converts to `bool`; absent or unrecognized input is `false`.
///
/// Use [`to_bool_or_null`] to tell "unrecognized" apart from `false`.
pub fn to_bool<'a>(data: impl Into<Value<'a>>) -> bool {
    or_default(try_to_bool(data), false, "bool")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_table() {
        assert_eq!(match_bool_token("0"), Some(false));
        assert_eq!(match_bool_token("1"), Some(true));
        assert_eq!(match_bool_token("是"), Some(true));
        assert_eq!(match_bool_token("否"), Some(false));
        assert_eq!(match_bool_token(" YES "), Some(true));
        assert_eq!(match_bool_token("No"), Some(false));
        assert_eq!(match_bool_token("true"), None);
        assert_eq!(match_bool_token("maybe"), None);
        assert_eq!(match_bool_token(""), None);
    }

    #[test]
    fn test_to_bool_tokens() {
        for (input, expected) in [
            ("0", false),
            ("1", true),
            (" 是 ", true),
            ("否", false),
            ("Yes", true),
            ("  nO\t", false),
        ] {
            assert_eq!(to_bool(input), expected, "to_bool({:?})", input);
            assert_eq!(to_bool_or_null(input), Some(expected), "to_bool_or_null({:?})", input);
        }
    }

    #[test]
    fn test_literal_fallback() {
        assert!(to_bool("True"));
        assert!(to_bool(" TRUE "));
        assert!(!to_bool("false"));
        assert_eq!(to_bool_or_null("False"), Some(false));
    }

    #[test]
    fn test_unrecognized() {
        assert!(!to_bool("maybe"));
        assert_eq!(to_bool_or_null("maybe"), None);
        assert!(!to_bool("2"));
        assert_eq!(to_bool_or_null("2"), None);
        assert!(!to_bool(""));
        assert_eq!(to_bool_or_null(""), None);
        assert!(matches!(try_to_bool("maybe"), Err(ConvertError::InvalidBool { .. })));
    }

    #[test]
    fn test_non_text_inputs() {
        assert!(!to_bool(None::<&str>));
        assert_eq!(to_bool_or_null(Value::Null), None);
        assert!(to_bool(true));
        assert_eq!(to_bool_or_null(false), Some(false));
        assert!(to_bool(1));
        assert!(!to_bool(0i64));
        assert!(!to_bool(5));
        assert_eq!(to_bool_or_null(5), None);
        // 1.0 displays as "1"
        assert!(to_bool(1.0));
    }
}
