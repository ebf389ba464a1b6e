use std::mem::size_of;

use crate::{NamedTag, TagID, Value, util::encode_string};

impl Value {
    /// The exact number of bytes the payload of this value occupies in the
    /// binary format, without the kind byte and name.
    pub fn payload_len(&self) -> usize {
        match self {
            Value::End => 0,
            Value::Byte(_) => size_of::<i8>(),
            Value::Short(_) => size_of::<i16>(),
            Value::Int(_) => size_of::<i32>(),
            Value::Long(_) => size_of::<i64>(),
            Value::Float(_) => size_of::<f32>(),
            Value::Double(_) => size_of::<f64>(),
            Value::ByteArray(value) => 4 + value.len(),
            Value::String(value) => string_len(value),
            Value::List(value) => 1 + 4 + value.iter().map(Value::payload_len).sum::<usize>(),
            Value::Compound(value) => {
                value
                    .iter()
                    .map(|(name, value)| entry_len(name, value))
                    .sum::<usize>()
                    + 1
            }
            Value::IntArray(value) => 4 + value.len() * size_of::<i32>(),
            Value::LongArray(value) => 4 + value.len() * size_of::<i64>(),
        }
    }
}

impl NamedTag {
    /// The exact number of bytes [`write_tag`](crate::write_tag) produces
    /// for this tag.
    pub fn encoded_len(&self) -> usize {
        entry_len(&self.name, &self.value)
    }
}

#[inline]
fn string_len(value: &str) -> usize {
    2 + encode_string(value).len()
}

#[inline]
pub(crate) fn entry_len(name: &str, value: &Value) -> usize {
    if value.id() == TagID::End {
        1
    } else {
        1 + string_len(name) + value.payload_len()
    }
}
