//! End-to-end conversion scenarios across every target type.

use coerce::{
    DateTime, Decimal, Value, safe_string, stringify, to_bool, to_bool_or_null, to_date,
    to_date_or_null, to_decimal, to_decimal_or_null, to_decimal_rounded, to_double,
    to_double_or_null, to_double_rounded, to_int, to_int_or_null,
};

#[test]
fn absent_input_gives_defaults() {
    let absent: Option<&str> = None;

    assert_eq!(to_int(absent), 0);
    assert_eq!(to_double(absent), 0.0);
    assert_eq!(to_decimal(absent), Decimal::ZERO);
    assert_eq!(to_date(absent), DateTime::MIN);
    assert!(!to_bool(absent));
    assert_eq!(stringify(absent), "");
    assert_eq!(safe_string(absent), "");

    assert_eq!(to_int_or_null(absent), None);
    assert_eq!(to_double_or_null(absent), None);
    assert_eq!(to_decimal_or_null(absent), None);
    assert_eq!(to_date_or_null(absent), None);
    assert_eq!(to_bool_or_null(absent), None);
}

#[test]
fn padded_integer_text() {
    assert_eq!(to_int("  10  "), 10);
    assert_eq!(stringify("  10  "), "10");
}

#[test]
fn affirmative_word() {
    assert!(to_bool("是"));
    assert_eq!(to_bool_or_null("是"), Some(true));
    assert!(!to_bool("否"));
    assert_eq!(to_bool_or_null("否"), Some(false));
}

#[test]
fn garbage_text() {
    assert_eq!(to_int_or_null("abc"), None);
    assert_eq!(to_int("abc"), 0);
    assert!(!to_bool("abc"));
    assert_eq!(to_date("abc"), DateTime::MIN);
}

#[test]
fn rounding() {
    assert_eq!(to_double_rounded("3.14159", 2), 3.14);
    assert_eq!(to_decimal_rounded("2.005", 2).to_string(), "2.00");
}

#[test]
fn one_value_many_targets() {
    let value = Value::from(" 1 ");

    assert_eq!(to_int(&value), 1);
    assert_eq!(to_double(&value), 1.0);
    assert_eq!(to_decimal(&value).to_string(), "1");
    assert!(to_bool(&value));
    assert_eq!(to_date_or_null(&value), None);
    assert_eq!(stringify(&value), "1");
}

#[test]
fn owned_strings_and_options() {
    let input: Option<String> = Some(String::from(" 2024-01-31 "));
    let dt = to_date(input.as_deref());
    assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 31));

    let n: Option<i64> = Some(99);
    assert_eq!(to_int(n), 99);
    assert_eq!(stringify(n), "99");
}

#[test]
fn conversions_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!(" {} ", i);
                (to_int(text.as_str()), to_bool(text.as_str()))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (n, b) = handle.join().unwrap();
        assert_eq!(n, i as i32);
        assert_eq!(b, i == 1);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_as_text() {
    let d = to_decimal("2.50");
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2.50\"");
    let back: Decimal = serde_json::from_str("\"2.50\"").unwrap();
    assert_eq!(back.to_string(), "2.50");

    let dt = to_date("2024-03-15T14:30:00+05:30");
    let json = serde_json::to_string(&dt).unwrap();
    assert_eq!(json, "\"2024-03-15T14:30:00+05:30\"");
    let back: DateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dt);

    assert!(serde_json::from_str::<Decimal>("\"abc\"").is_err());
}
