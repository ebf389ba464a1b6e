use std::{fmt, slice};

use crate::{Error, Result, TagID, Value, util::check_index};

mod private {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// An element type of a typed array: `i8` for TAG_Byte_Array, `i32` for
/// TAG_Int_Array and `i64` for TAG_Long_Array.
pub trait ArrayElement:
    private::Sealed + Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The kind of a single element.
    const ELEMENT_ID: TagID;
    /// The kind of the array holding these elements.
    const ARRAY_ID: TagID;

    fn from_value(value: &Value) -> Option<Self>;

    fn into_value(self) -> Value;
}

impl ArrayElement for i8 {
    const ELEMENT_ID: TagID = TagID::Byte;
    const ARRAY_ID: TagID = TagID::ByteArray;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_byte()
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Byte(self)
    }
}

impl ArrayElement for i32 {
    const ELEMENT_ID: TagID = TagID::Int;
    const ARRAY_ID: TagID = TagID::IntArray;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl ArrayElement for i64 {
    const ELEMENT_ID: TagID = TagID::Long;
    const ARRAY_ID: TagID = TagID::LongArray;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_long()
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Long(self)
    }
}

/// A typed array tag. Elements are unnamed and all of kind
/// `T::ELEMENT_ID`, which the storage type guarantees.
#[derive(Clone, PartialEq)]
pub struct Array<T: ArrayElement> {
    items: Vec<T>,
}

pub type ByteArray = Array<i8>;
pub type IntArray = Array<i32>;
pub type LongArray = Array<i64>;

impl<T: ArrayElement> Default for Array<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ArrayElement> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(T::ARRAY_ID.name()).field(&self.items).finish()
    }
}

impl<T: ArrayElement> Array<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(self.items[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Fails with [`Error::TypeMismatch`] if `value` is not of the element
    /// kind and with [`Error::IndexOutOfBounds`] if `index` is past the end.
    pub fn set(&mut self, index: usize, value: Value) -> Result<T> {
        let element = Self::element_of(&value)?;
        check_index(index, self.items.len())?;
        Ok(std::mem::replace(&mut self.items[index], element))
    }

    /// Appends `value`, which must be of the element kind.
    pub fn add(&mut self, value: Value) -> Result<()> {
        let element = Self::element_of(&value)?;
        self.items.push(element);
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn element_of(value: &Value) -> Result<T> {
        T::from_value(value).ok_or_else(|| Error::TypeMismatch {
            expected: T::ELEMENT_ID,
            actual: value.id(),
        })
    }
}

impl<T: ArrayElement> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: ArrayElement> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T: ArrayElement> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: ArrayElement> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ArrayElement> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
