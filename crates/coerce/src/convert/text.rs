//! Stringification.

use std::borrow::Cow;

use crate::model::Value;

/// Converts any value to trimmed text; absent input becomes `""`.
///
/// Borrowed text is trimmed in place without allocating. Every other
/// conversion in this crate starts from this text.
pub fn stringify<'a>(data: impl Into<Value<'a>>) -> Cow<'a, str> {
    match data.into() {
        Value::Null => Cow::Borrowed(""),
        Value::Text(Cow::Borrowed(s)) => Cow::Borrowed(s.trim()),
        Value::Text(Cow::Owned(s)) => Cow::Owned(trim_owned(s)),
        other => Cow::Owned(trim_owned(other.to_string())),
    }
}

/// Same as [`stringify`]; kept as a separate name for call sites that read
/// better with it.
pub fn safe_string<'a>(data: impl Into<Value<'a>>) -> Cow<'a, str> {
    stringify(data)
}

fn trim_owned(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateTime, Decimal};
    use proptest::prelude::*;

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(stringify(Value::Null), "");
        assert_eq!(stringify(None::<&str>), "");
        assert_eq!(safe_string(None::<i64>), "");
    }

    #[test]
    fn test_trims_text() {
        assert_eq!(stringify("  10  "), "10");
        assert_eq!(stringify(String::from("\t a b \n")), "a b");
        assert_eq!(safe_string(" x "), "x");
        assert!(matches!(stringify(" borrowed "), Cow::Borrowed("borrowed")));
    }

    #[test]
    fn test_non_text_values() {
        assert_eq!(stringify(42), "42");
        assert_eq!(stringify(-3.5), "-3.5");
        assert_eq!(stringify(true), "true");
        assert_eq!(stringify(Decimal::new(1050, 2).unwrap()), "10.50");
        assert_eq!(stringify(DateTime::MIN), "0001-01-01T00:00:00");
    }

    proptest! {
        #[test]
        fn prop_stringify_idempotent(s in "\\PC*") {
            let once = stringify(s.as_str()).into_owned();
            let twice = stringify(once.as_str());
            prop_assert_eq!(twice, once.as_str());
        }

        #[test]
        fn prop_safe_string_matches_stringify(s in "\\PC*") {
            prop_assert_eq!(safe_string(s.as_str()), stringify(s.as_str()));
        }
    }
}
