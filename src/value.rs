use crate::{ByteArray, Compound, IntArray, List, LongArray, TagID};

/// The payload of one NBT tag.
///
/// Every variant corresponds to exactly one [`TagID`]; names live in the
/// enclosing [`Compound`] or in a [`NamedTag`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Value {
    pub const fn id(&self) -> TagID {
        match self {
            Value::End => TagID::End,
            Value::Byte(_) => TagID::Byte,
            Value::Short(_) => TagID::Short,
            Value::Int(_) => TagID::Int,
            Value::Long(_) => TagID::Long,
            Value::Float(_) => TagID::Float,
            Value::Double(_) => TagID::Double,
            Value::ByteArray(_) => TagID::ByteArray,
            Value::String(_) => TagID::String,
            Value::List(_) => TagID::List,
            Value::Compound(_) => TagID::Compound,
            Value::IntArray(_) => TagID::IntArray,
            Value::LongArray(_) => TagID::LongArray,
        }
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte_array(&self) -> Option<&ByteArray> {
        match self {
            Value::ByteArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int_array(&self) -> Option<&IntArray> {
        match self {
            Value::IntArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long_array(&self) -> Option<&LongArray> {
        match self {
            Value::LongArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte_array_mut(&mut self) -> Option<&mut ByteArray> {
        match self {
            Value::ByteArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int_array_mut(&mut self) -> Option<&mut IntArray> {
        match self {
            Value::IntArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long_array_mut(&mut self) -> Option<&mut LongArray> {
        match self {
            Value::LongArray(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    &str => String,
    ByteArray => ByteArray,
    Vec<i8> => ByteArray,
    List => List,
    Compound => Compound,
    IntArray => IntArray,
    Vec<i32> => IntArray,
    LongArray => LongArray,
    Vec<i64> => LongArray,
);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}

/// A tag together with its name, as found at the top of a binary document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedTag {
    pub name: String,
    pub value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> TagID {
        self.value.id()
    }
}
