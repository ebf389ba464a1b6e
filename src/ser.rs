//! [`Serialize`] for the tag model.
//!
//! Compounds become maps in child order, lists and typed arrays become
//! sequences, and scalars their Rust primitive. `End` serializes as a unit.
//! Kinds are not recorded, so the output is meant for inspection and export
//! (JSON dumps and the like) rather than for reading back as NBT.

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeStruct},
};

use crate::{ArrayElement, Compound, Document, List, NamedTag, Value, array::Array};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(value) => serializer.serialize_i8(*value),
            Value::Short(value) => serializer.serialize_i16(*value),
            Value::Int(value) => serializer.serialize_i32(*value),
            Value::Long(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f32(*value),
            Value::Double(value) => serializer.serialize_f64(*value),
            Value::ByteArray(array) => array.serialize(serializer),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(list) => list.serialize(serializer),
            Value::Compound(compound) => compound.serialize(serializer),
            Value::IntArray(array) => array.serialize(serializer),
            Value::LongArray(array) => array.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<T: ArrayElement + Serialize> Serialize for Array<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for NamedTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NamedTag", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("root", &self.root)?;
        state.end()
    }
}
