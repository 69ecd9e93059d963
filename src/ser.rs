//! serde bridge: convert any `Serialize` type into a [`Value`].
//!
//! The renderer only understands the [`Value`] model. This module is how
//! arbitrary Rust data enters that model: [`ValueSerializer`] implements
//! `serde::Serializer` with `Value` as its output, so anything that derives
//! `Serialize` can be pretty-printed without hand-building a tree.
//!
//! Notable mappings:
//!
//! - `u8` becomes [`Value::Byte`], so `Vec<u8>` and `&[u8]` render as hex
//!   dumps like any other byte sequence
//! - structs become accessible [`Record`]s with fields in declared order
//! - maps keep their keys, which must serialize to scalars
//! - `None` and unit become [`Value::Null`]
//! - enum variants become the variant name (unit) or a single-field record
//!   named after the variant (newtype/tuple/struct)
//!
//! ## Usage
//!
//! ```rust
//! use prettify::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User { id: u32, name: String }
//!
//! let value = to_value(&User { id: 1, name: "Alice".into() }).unwrap();
//! let record = value.as_record().unwrap();
//! assert_eq!(record.fields()[0].0, "id");
//! ```

use crate::{Error, Key, Record, Result, Value, ValueMap};
use serde::{ser, Serialize};

/// A `serde::Serializer` whose output is a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeValueMap {
    map: ValueMap,
    current_key: Option<Key>,
}

pub struct SerializeRecord {
    record: Record,
}

pub struct SerializeVariant {
    variant: &'static str,
    inner: VariantBody,
}

pub enum VariantBody {
    Seq(Vec<Value>),
    Record(Record),
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariant;
    type SerializeMap = SerializeValueMap;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Byte(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::UInt(v as u64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::UInt(v as u64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::bytes(v))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(ValueSerializer)?;
        Ok(Value::Record(Record::new().field(variant, inner)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVariant> {
        Ok(SerializeVariant {
            variant,
            inner: VariantBody::Seq(Vec::new()),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap {
            map: ValueMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord {
            record: Record::new(),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVariant> {
        Ok(SerializeVariant {
            variant,
            inner: VariantBody::Record(Record::new()),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let VariantBody::Seq(vec) = &mut self.inner {
            vec.push(to_value(value)?);
        }
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let body = match self.inner {
            VariantBody::Seq(vec) => Value::Seq(vec),
            VariantBody::Record(record) => Value::Record(record),
        };
        Ok(Value::Record(Record::new().field(self.variant, body)))
    }
}

impl ser::SerializeMap for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record = std::mem::take(&mut self.record).field(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStructVariant for SerializeVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let VariantBody::Record(record) = &mut self.inner {
            *record = std::mem::take(record).field(key, to_value(value)?);
        }
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let body = match self.inner {
            VariantBody::Seq(vec) => Value::Seq(vec),
            VariantBody::Record(record) => Value::Record(record),
        };
        Ok(Value::Record(Record::new().field(self.variant, body)))
    }
}

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Converts a serialized scalar into a mapping key.
fn to_key<T: Serialize + ?Sized>(key: &T) -> Result<Key> {
    match to_value(key)? {
        Value::Bool(b) => Ok(Key::Bool(b)),
        Value::Int(i) => Ok(Key::Int(i)),
        Value::UInt(u) => Ok(Key::UInt(u)),
        Value::Byte(b) => Ok(Key::UInt(b as u64)),
        Value::String(s) => Ok(Key::Str(s)),
        other => Err(Error::unsupported_key(&format!(
            "map keys must be scalars, found {:?}",
            other
        ))),
    }
}
