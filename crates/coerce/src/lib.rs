//! Lenient value conversions.
//!
//! This crate turns loosely typed input (text read from forms, config files,
//! spreadsheets, query strings) into numbers, booleans and dates, with a
//! predictable answer for input that does not parse.
//!
//! # Quick Start
//!
//! ```rust
//! use coerce::{to_bool, to_bool_or_null, to_date_or_null, to_decimal_rounded, to_int, to_int_or_null, stringify};
//!
//! assert_eq!(to_int("  10  "), 10);
//! assert_eq!(to_int("3.7"), 3);          // double fallback, truncated
//! assert_eq!(to_int_or_null("3.7"), None);
//! assert_eq!(to_int("abc"), 0);
//!
//! assert!(to_bool("是"));
//! assert!(to_bool("Yes"));
//! assert_eq!(to_bool_or_null("maybe"), None);
//!
//! assert_eq!(to_decimal_rounded("2.005", 2).to_string(), "2.00");
//! assert!(to_date_or_null(None::<&str>).is_none());
//! assert_eq!(stringify(None::<&str>), "");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Input [`Value`], [`Decimal`] and [`DateTime`]
//! - [`convert`]: The conversion functions
//! - [`util`]: Strict text parsers the conversions are built on
//! - [`error`]: Error types
//! - [`limits`]: Numeric bounds
//!
//! # Failure handling
//!
//! Plain functions (`to_int`, `to_bool`, ...) never fail: absent or
//! unparseable input gives the type's default. The `*_or_null` functions
//! return `None` instead, and the `try_*` functions return a
//! [`ConvertError`]. Nothing panics.
//!
//! # Locale
//!
//! Parsing never depends on process locale. The decimal separator is `.`,
//! the group separator `,`, and dates follow fixed invariant layouts
//! (`2024-03-15`, `03/15/2024`, `15 March 2024`, RFC 1123) with English
//! month names and `AM`/`PM` times.

pub mod convert;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use convert::{
    safe_string, stringify, to_bool, to_bool_or_null, to_date, to_date_or_null, to_decimal,
    to_decimal_or_null, to_decimal_or_null_rounded, to_decimal_rounded, to_double,
    to_double_or_null, to_double_rounded, to_int, to_int_or_null, try_to_bool, try_to_date,
    try_to_decimal, try_to_double, try_to_int,
};
pub use error::{ConvertError, DateTimeParseError};
pub use model::{DateTime, Decimal, Rounding, Value, ValueKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
