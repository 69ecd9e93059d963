//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, the shape a piece of data must
//! take before it can be rendered. Every value is classified as exactly one
//! variant: a scalar, a container, a composite [`Record`], a nullable boxed
//! reference, or an escape hatch ([`Value::Verbatim`], [`Value::Unsupported`]).
//!
//! ## Core Types
//!
//! - [`Value`]: any renderable value
//! - [`Record`]: an ordered composite with named fields and a visibility gate
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use prettify::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the value! macro
//! use prettify::value;
//! let obj = value!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Classification
//!
//! ```rust
//! use prettify::Value;
//!
//! let seq = Value::from(vec![Value::from(1), Value::from(2)]);
//! assert!(seq.is_seq());
//! assert!(!seq.is_primitive());
//! assert!(!seq.is_empty());
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use prettify::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert!(value.is_record());
//! ```

use crate::ValueMap;
use chrono::{DateTime, Utc};
use std::fmt;

/// A dynamically-typed representation of any renderable value.
///
/// The renderer dispatches purely on this enum; there is no reflection.
/// Arbitrary Rust types enter the model through [`crate::to_value`] (serde)
/// or the `From` conversions below.
///
/// # Examples
///
/// ```rust
/// use prettify::Value;
///
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_int());
/// assert!(text.is_string());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Invalid or absent value, rendered as the configured nil marker.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integer. Not subject to hexadecimal mode; see [`Value::Byte`].
    UInt(u64),
    /// A raw byte. Scalars render in hexadecimal when the printer's hex mode
    /// is on, and a sequence made entirely of bytes renders as a hex dump.
    Byte(u8),
    Float(f64),
    String(String),
    Seq(Vec<Value>),
    Map(ValueMap),
    Record(Record),
    /// A nullable reference wrapping exactly one value, or absent.
    /// Rendering is transparent: the wrapped value renders at the same
    /// nesting level.
    Boxed(Option<Box<Value>>),
    Timestamp(DateTime<Utc>),
    /// Self-supplied text, written verbatim with no styling and no descent.
    Verbatim(String),
    /// A value the model cannot express, carrying its default textual form.
    /// Rendered through the printer's fallback handler when one is set.
    Unsupported(String),
}

/// An ordered composite with named fields.
///
/// Fields render in declared order. A record can be *sealed*: the renderer
/// then emits the literal token `protected` instead of any field, an
/// all-or-nothing visibility gate mirroring unexported-field semantics in
/// languages with field-level privacy.
///
/// # Examples
///
/// ```rust
/// use prettify::{Record, Value};
///
/// let record = Record::new()
///     .field("id", Value::Int(1))
///     .field("name", Value::from("widget"));
/// assert_eq!(record.len(), 2);
/// assert!(record.is_accessible());
///
/// let hidden = Record::new().field("secret", Value::Int(0)).sealed();
/// assert!(!hidden.is_accessible());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
    accessible: bool,
}

impl Record {
    /// Creates an empty, accessible record.
    #[must_use]
    pub fn new() -> Self {
        Record {
            fields: Vec::new(),
            accessible: true,
        }
    }

    /// Appends a field, preserving declaration order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Marks every field inaccessible. The record renders as `protected`.
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.accessible = false;
        self
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` unless the record is sealed.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a signed integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is an unsigned integer.
    #[inline]
    #[must_use]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Value::UInt(_))
    }

    /// Returns `true` if the value is a raw byte.
    #[inline]
    #[must_use]
    pub const fn is_byte(&self) -> bool {
        matches!(self, Value::Byte(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if the value is a boxed reference (present or absent).
    #[inline]
    #[must_use]
    pub const fn is_boxed(&self) -> bool {
        matches!(self, Value::Boxed(_))
    }

    /// Returns `true` if the value is a timestamp.
    #[inline]
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    /// Returns `true` for scalar categories, recursively through a boxed
    /// reference to a scalar.
    ///
    /// Timestamps, verbatim text, and records are composites, not
    /// primitives; a mapping places them on their own indented line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prettify::Value;
    ///
    /// assert!(Value::Int(1).is_primitive());
    /// assert!(Value::boxed(Value::from("x")).is_primitive());
    /// assert!(!Value::Seq(vec![]).is_primitive());
    /// assert!(!Value::Null.is_primitive());
    /// ```
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        match self {
            Value::Bool(_)
            | Value::Int(_)
            | Value::UInt(_)
            | Value::Byte(_)
            | Value::Float(_)
            | Value::String(_) => true,
            Value::Boxed(Some(inner)) => inner.is_primitive(),
            _ => false,
        }
    }

    /// Returns `true` for zero-length mappings and sequences, recursively
    /// through a boxed reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prettify::Value;
    ///
    /// assert!(Value::Seq(vec![]).is_empty());
    /// assert!(Value::boxed(Value::Seq(vec![])).is_empty());
    /// assert!(!Value::Int(0).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Seq(seq) => seq.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::Boxed(Some(inner)) => inner.is_empty(),
            _ => false,
        }
    }

    /// Wraps a value in a present boxed reference.
    #[must_use]
    pub fn boxed(value: impl Into<Value>) -> Value {
        Value::Boxed(Some(Box::new(value.into())))
    }

    /// An absent boxed reference. Renders as the nil marker.
    #[must_use]
    pub const fn absent() -> Value {
        Value::Boxed(None)
    }

    /// Builds a byte sequence. Renders as a hex dump outside compact mode.
    #[must_use]
    pub fn bytes(bytes: impl AsRef<[u8]>) -> Value {
        Value::Seq(bytes.as_ref().iter().map(|&b| Value::Byte(b)).collect())
    }

    /// Captures a value's own textual representation, to be written
    /// verbatim without styling or descent.
    #[must_use]
    pub fn stringable(value: &impl fmt::Display) -> Value {
        Value::Verbatim(value.to_string())
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a signed integer, or an unsigned integer or byte
    /// that fits, returns it as `i64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            Value::Byte(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a record, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// The default scalar textual form, used by the renderer when the depth
/// limit stops descent. Scalars print their plain (unstyled) text;
/// containers and records print placeholder tokens instead of their
/// structured form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Byte(b) => write!(f, "{}", b),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Seq(_) => write!(f, "<seq>"),
            Value::Map(_) => write!(f, "<map>"),
            Value::Record(r) => {
                if r.is_accessible() {
                    write!(f, "<record>")
                } else {
                    write!(f, "protected")
                }
            }
            Value::Boxed(Some(inner)) => write!(f, "{}", inner),
            Value::Boxed(None) => write!(f, "nil"),
            Value::Timestamp(t) => write!(f, "{}", t.format(crate::theme::DEFAULT_TIME_LAYOUT)),
            Value::Verbatim(s) => write!(f, "{}", s),
            Value::Unsupported(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Byte(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::bytes(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42u32), Value::UInt(42));
        assert_eq!(Value::from(7u8), Value::Byte(7));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(1i32)), Value::Int(1));
    }

    #[test]
    fn test_bytes_constructor() {
        let value = Value::bytes([1u8, 2, 3]);
        assert_eq!(
            value,
            Value::Seq(vec![Value::Byte(1), Value::Byte(2), Value::Byte(3)])
        );
    }

    #[test]
    fn test_is_primitive() {
        assert!(Value::Bool(true).is_primitive());
        assert!(Value::Int(-1).is_primitive());
        assert!(Value::UInt(1).is_primitive());
        assert!(Value::Byte(0xff).is_primitive());
        assert!(Value::Float(1.5).is_primitive());
        assert!(Value::from("s").is_primitive());

        assert!(!Value::Null.is_primitive());
        assert!(!Value::Seq(vec![]).is_primitive());
        assert!(!Value::Map(ValueMap::new()).is_primitive());
        assert!(!Value::Record(Record::new()).is_primitive());
        assert!(!Value::Verbatim("x".into()).is_primitive());
    }

    #[test]
    fn test_is_primitive_through_boxed() {
        assert!(Value::boxed(42).is_primitive());
        assert!(Value::boxed(Value::boxed("deep")).is_primitive());
        assert!(!Value::boxed(Value::Seq(vec![])).is_primitive());
        assert!(!Value::absent().is_primitive());
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Seq(vec![]).is_empty());
        assert!(Value::Map(ValueMap::new()).is_empty());
        assert!(Value::boxed(Value::Map(ValueMap::new())).is_empty());

        assert!(!Value::Seq(vec![Value::Null]).is_empty());
        assert!(!Value::Int(0).is_empty());
        assert!(!Value::from("").is_empty());
        assert!(!Value::Null.is_empty());
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "nil");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Byte(16).to_string(), "16");
        assert_eq!(Value::Float(1.25).to_string(), "1.25");
        assert_eq!(Value::from("raw").to_string(), "raw");
    }

    #[test]
    fn test_display_containers_are_placeholders() {
        assert_eq!(Value::Seq(vec![Value::Int(1)]).to_string(), "<seq>");
        assert_eq!(Value::Map(ValueMap::new()).to_string(), "<map>");
        assert_eq!(Value::Record(Record::new()).to_string(), "<record>");
        assert_eq!(
            Value::Record(Record::new().sealed()).to_string(),
            "protected"
        );
    }

    #[test]
    fn test_display_boxed_is_transparent() {
        assert_eq!(Value::boxed(5).to_string(), "5");
        assert_eq!(Value::absent().to_string(), "nil");
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new().field("a", 1).field("b", "two");
        assert_eq!(record.len(), 2);
        assert_eq!(record.fields()[0].0, "a");
        assert_eq!(record.fields()[1].1, Value::from("two"));
        assert!(record.is_accessible());
        assert!(!record.clone().sealed().is_accessible());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_i64(), Some(42));
        assert_eq!(Value::UInt(42).as_i64(), Some(42));
        assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
        assert_eq!(Value::Float(3.5).as_f64(), Some(3.5));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::Int(1).as_str(), None);
    }
}
