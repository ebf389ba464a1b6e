use std::collections::HashSet;

use crate::{Error, List, Result, TagID, Value, util::cold_path};

/// A TAG_Compound: named children in insertion order.
///
/// Names are non-empty and unique; every mutating method checks this and
/// leaves the compound untouched when it fails.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    entries: Vec<(String, Value)>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Result<&Value> {
        match self.position(name) {
            Some(index) => Ok(&self.entries[index].1),
            None => {
                cold_path();
                Err(Error::TagNotFound(name.to_owned()))
            }
        }
    }

    /// A child may be replaced wholesale through this reference, which could
    /// turn it into `End`; it therefore stays inside the crate.
    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        match self.position(name) {
            Some(index) => Ok(&mut self.entries[index].1),
            None => {
                cold_path();
                Err(Error::TagNotFound(name.to_owned()))
            }
        }
    }

    /// Mutable access to a child compound.
    pub fn get_compound_mut(&mut self, name: &str) -> Result<&mut Compound> {
        match self.get_mut(name)? {
            Value::Compound(compound) => Ok(compound),
            other => Err(Error::TypeMismatch {
                expected: TagID::Compound,
                actual: other.id(),
            }),
        }
    }

    /// Mutable access to a child list.
    pub fn get_list_mut(&mut self, name: &str) -> Result<&mut List> {
        match self.get_mut(name)? {
            Value::List(list) => Ok(list),
            other => Err(Error::TypeMismatch {
                expected: TagID::List,
                actual: other.id(),
            }),
        }
    }

    /// Replaces the existing child called `name`, returning the previous
    /// value. The child must already exist.
    pub fn set(&mut self, name: &str, value: Value) -> Result<Value> {
        check_child(&value)?;
        let slot = self.get_mut(name)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Adds a new child at the end.
    ///
    /// Fails with [`Error::InvalidName`] for an empty name and with
    /// [`Error::DuplicateTag`] if a child of that name already exists.
    pub fn add(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            cold_path();
            return Err(Error::InvalidName);
        }
        check_child(&value)?;
        if self.has(&name) {
            cold_path();
            return Err(Error::DuplicateTag(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Value> {
        match self.position(name) {
            Some(index) => Ok(self.entries.remove(index).1),
            None => {
                cold_path();
                Err(Error::TagNotFound(name.to_owned()))
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// End terminates a compound on disk and can never be one of its children.
fn check_child(value: &Value) -> Result<()> {
    if value.id() == TagID::End {
        cold_path();
        return Err(Error::TypeMismatch {
            expected: TagID::Compound,
            actual: TagID::End,
        });
    }
    Ok(())
}

/// Collects children in order with the checks of [`Compound::add`], looking
/// names up in a set so that wide compounds build in linear time.
pub(crate) struct CompoundBuilder {
    entries: Vec<(String, Value)>,
    names: HashSet<String>,
}

impl CompoundBuilder {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            names: HashSet::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: Value) -> Result<()> {
        if name.is_empty() {
            cold_path();
            return Err(Error::InvalidName);
        }
        check_child(&value)?;
        if !self.names.insert(name.clone()) {
            cold_path();
            return Err(Error::DuplicateTag(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    pub(crate) fn finish(self) -> Compound {
        Compound {
            entries: self.entries,
        }
    }
}

impl TryFrom<Vec<(String, Value)>> for Compound {
    type Error = Error;

    fn try_from(entries: Vec<(String, Value)>) -> Result<Self> {
        let mut builder = CompoundBuilder::with_capacity(entries.len());
        for (name, value) in entries {
            builder.push(name, value)?;
        }
        Ok(builder.finish())
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
