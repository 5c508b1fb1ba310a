//! Date conversions.

use crate::convert::{or_default, stringify};
use crate::error::ConvertError;
use crate::model::{DateTime, Value};

/// Strictly converts to [`DateTime`].
pub fn try_to_date<'a>(data: impl Into<Value<'a>>) -> Result<DateTime, ConvertError> {
    match data.into() {
        Value::Null => Err(ConvertError::Absent),
        Value::Date(v) => Ok(v),
        other => Ok(stringify(&other).parse::<DateTime>()?),
    }
}

/// Converts to [`DateTime`], or `None` if absent or unparseable.
pub fn to_date_or_null<'a>(data: impl Into<Value<'a>>) -> Option<DateTime> {
    try_to_date(data).ok()
}

/// Converts to [`DateTime`], or [`DateTime::MIN`] if absent or unparseable.
///
/// The offset written in the text is kept; nothing is converted to UTC.
pub fn to_date<'a>(data: impl Into<Value<'a>>) -> DateTime {
    or_default(try_to_date(data), DateTime::MIN, "date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        assert_eq!(to_date(None::<&str>), DateTime::MIN);
        assert_eq!(to_date_or_null(Value::Null), None);
        assert_eq!(try_to_date(Value::Null), Err(ConvertError::Absent));
    }

    #[test]
    fn test_parse() {
        let dt = to_date(" 2024-03-15 14:30 ");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 15));
        assert_eq!((dt.hour(), dt.minute()), (14, 30));
        assert_eq!(dt.offset_minutes(), None);

        let dt = to_date_or_null("2024-03-15T14:30:00+05:30").unwrap();
        assert_eq!(dt.offset_minutes(), Some(330));
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_common_written_forms() {
        let cases = [
            ("2024-03-15 2:30 PM", (2024, 3, 15, 14, 30)),
            ("03/15/2024", (2024, 3, 15, 0, 0)),
            ("15 March 2024", (2024, 3, 15, 0, 0)),
            ("Fri, 15 Mar 2024 14:30:00 GMT", (2024, 3, 15, 14, 30)),
            ("2024-03", (2024, 3, 1, 0, 0)),
            ("14:30", (1, 1, 1, 14, 30)),
            ("2024-3-15 14:5", (2024, 3, 15, 14, 5)),
        ];
        for (text, expected) in cases {
            let dt = to_date_or_null(text).unwrap_or_else(|| panic!("{} did not parse", text));
            assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()), expected, "{}", text);
        }
        assert_eq!(to_date("Fri, 15 Mar 2024 14:30:00 GMT").offset_minutes(), Some(0));
        assert_eq!(to_date("2024-03-15T00:00:00+24:00"), DateTime::MIN);
    }

    #[test]
    fn test_failures() {
        assert_eq!(to_date("abc"), DateTime::MIN);
        assert_eq!(to_date("2023-02-29"), DateTime::MIN);
        assert_eq!(to_date(20240315), DateTime::MIN);
        assert_eq!(to_date_or_null("abc"), None);
        assert!(matches!(try_to_date("abc"), Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_date_value_passes_through() {
        let dt = DateTime::from_ymd(2020, 1, 2).unwrap();
        assert_eq!(to_date(dt), dt);
        assert_eq!(to_date(stringify(dt)), dt);
    }
}
