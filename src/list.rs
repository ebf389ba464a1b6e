use std::slice;

use crate::{Error, Result, TagID, Value, util::check_index};

/// A TAG_List: unnamed children that all share one element kind.
///
/// An empty list records `TagID::End` unless it was created with
/// [`List::with_element_id`] or decoded from data that declared another kind.
/// `End` values are never elements, so a list whose element kind is `End`
/// always stays empty.
#[derive(Clone, Debug)]
pub struct List {
    element_id: TagID,
    items: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            element_id: TagID::End,
            items: Vec::new(),
        }
    }
}

/// The element kind of an empty list has no textual form, so two empty lists
/// are equal whatever kind they record.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.items.is_empty() && other.items.is_empty() {
            return true;
        }
        self.element_id == other.element_id && self.items == other.items
    }
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that accepts elements of `element_id`.
    pub fn with_element_id(element_id: TagID) -> Self {
        Self {
            element_id,
            items: Vec::new(),
        }
    }

    /// Builds a list from elements already known to be of `element_id`.
    pub(crate) fn from_raw(element_id: TagID, items: Vec<Value>) -> Self {
        debug_assert!(items.iter().all(|item| item.id() == element_id));
        Self { element_id, items }
    }

    #[inline]
    pub fn element_id(&self) -> TagID {
        self.element_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Only handed out inside the crate, to callers that keep the element's
    /// kind (path descent into nested containers).
    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        check_index(index, self.items.len())?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        check_index(index, self.items.len())?;
        self.check_element(&value)?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Appends `value`; its kind must be the list's element kind.
    pub fn add(&mut self, value: Value) -> Result<()> {
        self.check_element(&value)?;
        self.items.push(value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Value> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    /// Removes every element. The element kind is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    fn check_element(&self, value: &Value) -> Result<()> {
        let actual = value.id();
        if actual != self.element_id || actual == TagID::End {
            return Err(Error::TypeMismatch {
                expected: self.element_id,
                actual,
            });
        }
        Ok(())
    }
}

/// Collects values into a list whose element kind is that of the first
/// value, failing with [`Error::TypeMismatch`] on the first value of another
/// kind.
impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        let mut list = match values.first() {
            Some(first) => List::with_element_id(first.id()),
            None => List::new(),
        };
        list.items.reserve(values.len());
        for value in values {
            list.add(value)?;
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
