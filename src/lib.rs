//! # prettify
//!
//! A human-oriented pretty-printer for structured values.
//!
//! `prettify` renders any tree of [`Value`]s (or any `T: Serialize`) as
//! indented, optionally colorized text meant for terminals, logs, and
//! debugging sessions. It is a presentation layer, not a data format:
//! the output is for people, and there is no parser for it.
//!
//! ## Key Features
//!
//! - **Recursive rendering**: sequences, maps, records, and boxed values
//!   nest to any depth, with a configurable depth cutoff
//! - **Byte hex dumps**: byte sequences render as offset-annotated hex rows
//!   with a printable-character preview column
//! - **Deterministic maps**: keys sort ascending, descending, or keep
//!   insertion order
//! - **Color themes**: per-kind ANSI colors via a [`Theme`], or plain text
//!   for tests and redirected output
//! - **Serde Compatible**: any `#[derive(Serialize)]` type converts to a
//!   [`Value`] via [`to_value`]
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! prettify = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Printing a struct
//!
//! ```rust
//! use serde::Serialize;
//! use prettify::{to_value, Printer};
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = Printer::plain().format(&to_value(&user).unwrap());
//! assert!(text.contains("name: \"Alice\""));
//! ```
//!
//! ### Dynamic values with the value! macro
//!
//! ```rust
//! use prettify::{value, Printer};
//!
//! let data = value!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "cli"]
//! });
//!
//! let text = Printer::plain().format(&data);
//! assert!(text.starts_with("{\n"));
//! ```
//!
//! ### Customizing output
//!
//! ```rust
//! use prettify::{value, Printer, SortKeys};
//!
//! let printer = Printer::plain()
//!     .with_indent("    ")
//!     .with_sort_keys(SortKeys::Descending)
//!     .with_compact_seq(true);
//!
//! let text = printer.format(&value!({"b": [1, 2], "a": true}));
//! ```
//!
//! ## Output sinks
//!
//! [`Printer::format`] returns a `String` and cannot fail; the only
//! fallible operations are the writer-facing ones ([`Printer::print_to`]
//! and friends), which surface `std::io::Error`.

pub mod error;
pub mod hexdump;
pub mod macros;
pub mod map;
pub mod printer;
pub mod ser;
pub mod theme;
pub mod value;

pub use error::{Error, Result};
pub use map::{Key, ValueMap};
pub use printer::{Printer, SortKeys};
pub use ser::ValueSerializer;
pub use theme::{Style, Theme};
pub use value::{Record, Value};

use serde::Serialize;
use std::io;

/// Render a value with the default printer configuration.
///
/// The default printer colorizes scalars, sorts map keys ascending, and
/// hex-dumps byte sequences. Use [`Printer::plain`] for uncolored output.
///
/// # Examples
///
/// ```rust
/// use prettify::{value, format};
///
/// let text = format(&value!([1, 2, 3]));
/// ```
pub fn format(value: &Value) -> String {
    Printer::default().format(value)
}

/// Render a value with the default printer, followed by a newline.
pub fn format_line(value: &Value) -> String {
    Printer::default().format_line(value)
}

/// Render a value to standard output with the default printer.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print(value: &Value) -> Result<()> {
    Printer::default().print(value)
}

/// Render a value to standard output with the default printer, followed by
/// a newline.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn println(value: &Value) -> Result<()> {
    Printer::default().println(value)
}

/// Render a value into any writer with the default printer.
///
/// # Examples
///
/// ```rust
/// use prettify::{value, print_to};
///
/// let mut buffer = Vec::new();
/// print_to(&mut buffer, &value!({"x": 1})).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_to<W: io::Write>(writer: W, value: &Value) -> Result<()> {
    Printer::default().print_to(writer, value)
}

/// Render a value into any writer with the default printer, followed by a
/// newline.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn println_to<W: io::Write>(writer: W, value: &Value) -> Result<()> {
    Printer::default().println_to(writer, value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful when the shape of the data isn't known at compile time, or when
/// a serializable type should be inspected or rearranged before printing.
///
/// # Examples
///
/// ```rust
/// use prettify::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_record());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., a map with a
/// non-scalar key).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Render any `T: Serialize` with the default printer.
///
/// Shorthand for [`to_value`] followed by [`format`].
///
/// # Examples
///
/// ```rust
/// use prettify::format_any;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = format_any(&Point { x: 1, y: 2 }).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_any<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(format(&to_value(value)?))
}
