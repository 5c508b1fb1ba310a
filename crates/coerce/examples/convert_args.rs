//! Prints every conversion of each command-line argument.
//!
//! ```text
//! cargo run --example convert_args -- " 42 " 3.7 是 2024-03-15T14:30+05:30 abc
//! ```

use coerce::{
    Value, stringify, to_bool, to_bool_or_null, to_date, to_date_or_null, to_decimal,
    to_decimal_or_null, to_double, to_double_or_null, to_int, to_int_or_null,
};

fn format_option<T: std::fmt::Display>(v: Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: convert_args <value>...");
        std::process::exit(2);
    }

    for arg in &args {
        let value = Value::from(arg);

        println!("=== {:?} ===", arg);
        println!("  stringify: {:?}", stringify(&value));
        println!("  int:       {:<24} or_null: {}", to_int(&value), format_option(to_int_or_null(&value)));
        println!("  double:    {:<24} or_null: {}", to_double(&value), format_option(to_double_or_null(&value)));
        println!("  decimal:   {:<24} or_null: {}", to_decimal(&value), format_option(to_decimal_or_null(&value)));
        println!("  bool:      {:<24} or_null: {}", to_bool(&value), format_option(to_bool_or_null(&value)));
        println!("  date:      {:<24} or_null: {}", to_date(&value), format_option(to_date_or_null(&value)));
    }
}
