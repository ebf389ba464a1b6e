//! Path expressions for reaching nested tags.
//!
//! A path is a sequence of [`Segment`]s: compound keys and list or array
//! indices. Its string form separates keys with dots and writes indices in
//! brackets; a key that itself contains dots or brackets is double-quoted.
//!
//! ```
//! use nbt_edit::{Path, Segment, Value, get_by_path, parse_text, set_by_path};
//!
//! let path: Path = "Inventory[0].\"tag.name\"".parse().unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::Key("Inventory".into()),
//!         Segment::Index(0),
//!         Segment::Key("tag.name".into()),
//!     ]
//! );
//!
//! let mut root = parse_text("{a: {b: [1, 2, 3]}}").unwrap();
//! assert_eq!(*get_by_path(&root, "a.b[1]").unwrap(), Value::Int(2));
//! set_by_path(&mut root, "a.b[1]", Value::Int(20)).unwrap();
//! assert_eq!(*get_by_path(&root, &path_of("a.b[1]")).unwrap(), Value::Int(20));
//! # fn path_of(s: &str) -> Path { s.parse().unwrap() }
//! ```

use std::{borrow::Cow, fmt, str::FromStr};

use crate::{Compound, Error, Result, TagID, Value, util::cold_path};

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Selects a compound child by name.
    Key(String),
    /// Selects a list element or typed-array element by position.
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// A parsed path expression.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, which addresses the root itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the string form: keys separated by runs of `.`, indices as
    /// `[n]` with `n` made of decimal digits only, keys containing either in
    /// double quotes. Inside quotes a backslash escapes the next character.
    /// Empty keys are dropped.
    pub fn parse(src: &str) -> Result<Self> {
        let invalid = || {
            cold_path();
            Error::InvalidPath(src.to_owned())
        };
        let mut segments = Vec::new();
        let mut key = String::new();
        let mut rest = src;
        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];
            match c {
                '.' => flush_key(&mut key, &mut segments),
                '[' => {
                    flush_key(&mut key, &mut segments);
                    let close = rest.find(']').ok_or_else(invalid)?;
                    let index = parse_index(&rest[..close]).ok_or_else(invalid)?;
                    segments.push(Segment::Index(index));
                    rest = &rest[close + 1..];
                }
                '"' => {
                    flush_key(&mut key, &mut segments);
                    let mut chars = rest.char_indices();
                    let close = loop {
                        match chars.next() {
                            Some((i, '"')) => break i,
                            Some((_, '\\')) => match chars.next() {
                                Some((_, escaped)) => key.push(escaped),
                                None => return Err(invalid()),
                            },
                            Some((_, c)) => key.push(c),
                            None => return Err(invalid()),
                        }
                    };
                    flush_key(&mut key, &mut segments);
                    rest = &rest[close + 1..];
                }
                c => key.push(c),
            }
        }
        flush_key(&mut key, &mut segments);
        Ok(Self { segments })
    }

    /// Builds a path from already split parts. Each part is `[n]`, a
    /// double-quoted key, or a plain key; empty parts are dropped.
    ///
    /// ```
    /// use nbt_edit::{Path, Segment};
    ///
    /// let path = Path::from_parts(["a", "[2]", "\"x.y\""]).unwrap();
    /// assert_eq!(path.segments()[1], Segment::Index(2));
    /// assert_eq!(path.segments()[2], Segment::Key("x.y".into()));
    /// ```
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = Vec::new();
        for part in parts {
            let part = part.as_ref();
            if let Some(inner) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
                let index = parse_index(inner).ok_or_else(|| {
                    cold_path();
                    Error::InvalidPath(part.to_owned())
                })?;
                segments.push(Segment::Index(index));
                continue;
            }
            let key = part
                .strip_prefix('"')
                .and_then(|p| p.strip_suffix('"'))
                .unwrap_or(part);
            if !key.is_empty() {
                segments.push(Segment::Key(key.to_owned()));
            }
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }
}

/// Only ASCII digits; no sign.
fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn flush_key(key: &mut String, segments: &mut Vec<Segment>) {
    if !key.is_empty() {
        segments.push(Segment::Key(std::mem::take(key)));
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self> {
        Path::parse(src)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    if key.contains(['.', '[', ']', '"']) {
                        f.write_str("\"")?;
                        for c in key.chars() {
                            if matches!(c, '"' | '\\') {
                                f.write_str("\\")?;
                            }
                            write!(f, "{c}")?;
                        }
                        f.write_str("\"")?;
                    } else {
                        f.write_str(key)?;
                    }
                }
            }
        }
        Ok(())
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::Path {}
    impl Sealed for [super::Segment] {}
    impl Sealed for Vec<super::Segment> {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// Anything that names a path: a string expression, a [`Path`], or a slice
/// of [`Segment`]s.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait AsPath: private::Sealed {
    #[doc(hidden)]
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R>;
}

impl AsPath for str {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        f(Path::parse(self)?.segments())
    }
}

impl AsPath for String {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        self.as_str().with_segments(f)
    }
}

impl AsPath for Path {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        f(&self.segments)
    }
}

impl AsPath for [Segment] {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        f(self)
    }
}

impl AsPath for Vec<Segment> {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        f(self)
    }
}

impl<T: AsPath + ?Sized> AsPath for &T {
    fn with_segments<R>(&self, f: impl FnOnce(&[Segment]) -> Result<R>) -> Result<R> {
        (**self).with_segments(f)
    }
}

/// Reads the value `path` points at.
///
/// List elements and compound children are borrowed from `root`;
/// typed-array elements are returned as owned scalars. The empty path
/// yields `root`.
pub fn get_by_path<'a>(root: &'a Value, path: impl AsPath) -> Result<Cow<'a, Value>> {
    path.with_segments(|segments| walk(root, segments))
}

/// Replaces the existing value `path` points at.
///
/// Every segment must already exist: a missing key is a
/// [`Error::KeyError`] and a missing index an [`Error::IndexOutOfBounds`].
/// The replacement must respect the kind rules of its container. The empty
/// path replaces `root`. On failure `root` is left unchanged.
pub fn set_by_path(root: &mut Value, path: impl AsPath, value: Value) -> Result<()> {
    path.with_segments(|segments| match segments.split_last() {
        None => {
            *root = value;
            Ok(())
        }
        Some((last, parents)) => assign(walk_mut(root, parents, last)?, last, value),
    })
}

fn walk<'a>(root: &'a Value, segments: &[Segment]) -> Result<Cow<'a, Value>> {
    let mut current = root;
    for (i, segment) in segments.iter().enumerate() {
        current = match (current, segment) {
            (Value::Compound(compound), Segment::Key(key)) => child(compound, key)?,
            (Value::List(list), Segment::Index(index)) => list.get(*index)?,
            (array, Segment::Index(index)) if array.id().is_array() => {
                let element = array_element(array, *index)?;
                return match segments.get(i + 1) {
                    None => Ok(Cow::Owned(element)),
                    Some(next) => Err(step_error(element.id(), next)),
                };
            }
            (other, segment) => return Err(step_error(other.id(), segment)),
        };
    }
    Ok(Cow::Borrowed(current))
}

/// Descends through `segments`, which lead to the container that `last`
/// will be applied to.
fn walk_mut<'a>(
    root: &'a mut Value,
    segments: &[Segment],
    last: &Segment,
) -> Result<&'a mut Value> {
    let mut current = root;
    for (i, segment) in segments.iter().enumerate() {
        current = match (current, segment) {
            (Value::Compound(compound), Segment::Key(key)) => child_mut(compound, key)?,
            (Value::List(list), Segment::Index(index)) => list.get_mut(*index)?,
            (array, Segment::Index(index)) if array.id().is_array() => {
                let element = array_element(array, *index)?;
                let next = segments.get(i + 1).unwrap_or(last);
                return Err(step_error(element.id(), next));
            }
            (other, segment) => return Err(step_error(other.id(), segment)),
        };
    }
    Ok(current)
}

fn assign(target: &mut Value, segment: &Segment, value: Value) -> Result<()> {
    match (target, segment) {
        (Value::Compound(compound), Segment::Key(key)) => set_child(compound, key, value),
        (Value::List(list), Segment::Index(index)) => list.set(*index, value).map(drop),
        (Value::ByteArray(array), Segment::Index(index)) => array.set(*index, value).map(drop),
        (Value::IntArray(array), Segment::Index(index)) => array.set(*index, value).map(drop),
        (Value::LongArray(array), Segment::Index(index)) => array.set(*index, value).map(drop),
        (other, segment) => Err(step_error(other.id(), segment)),
    }
}

fn array_element(array: &Value, index: usize) -> Result<Value> {
    Ok(match array {
        Value::ByteArray(array) => Value::Byte(array.get(index)?),
        Value::IntArray(array) => Value::Int(array.get(index)?),
        Value::LongArray(array) => Value::Long(array.get(index)?),
        other => return Err(Error::NotIndexable(other.id())),
    })
}

/// The error for applying `segment` to a value of kind `kind` that cannot
/// take it.
fn step_error(kind: TagID, segment: &Segment) -> Error {
    cold_path();
    match segment {
        Segment::Key(_) => Error::NotCompound(kind),
        Segment::Index(_) => Error::NotIndexable(kind),
    }
}

fn key_error(error: Error) -> Error {
    match error {
        Error::TagNotFound(key) => Error::KeyError(key),
        other => other,
    }
}

fn child<'a>(compound: &'a Compound, key: &str) -> Result<&'a Value> {
    compound.get(key).map_err(key_error)
}

fn child_mut<'a>(compound: &'a mut Compound, key: &str) -> Result<&'a mut Value> {
    compound.get_mut(key).map_err(key_error)
}

fn set_child(compound: &mut Compound, key: &str, value: Value) -> Result<()> {
    compound.set(key, value).map(drop).map_err(key_error)
}

impl Value {
    /// See [`get_by_path`].
    pub fn get_path(&self, path: impl AsPath) -> Result<Cow<'_, Value>> {
        get_by_path(self, path)
    }

    /// See [`set_by_path`].
    pub fn set_path(&mut self, path: impl AsPath, value: Value) -> Result<()> {
        set_by_path(self, path, value)
    }
}

impl Compound {
    /// Reads the value `path` points at, starting from this compound.
    ///
    /// The empty path yields a copy of the compound itself.
    pub fn get_path(&self, path: impl AsPath) -> Result<Cow<'_, Value>> {
        path.with_segments(|segments| match segments.split_first() {
            None => Ok(Cow::Owned(Value::Compound(self.clone()))),
            Some((Segment::Key(key), rest)) => walk(child(self, key)?, rest),
            Some((segment, _)) => Err(step_error(TagID::Compound, segment)),
        })
    }

    /// Replaces the value `path` points at, starting from this compound.
    ///
    /// The empty path replaces the whole compound, which requires `value` to
    /// be a compound.
    pub fn set_path(&mut self, path: impl AsPath, value: Value) -> Result<()> {
        path.with_segments(|segments| match segments.split_first() {
            None => match value {
                Value::Compound(compound) => {
                    *self = compound;
                    Ok(())
                }
                other => Err(Error::TypeMismatch {
                    expected: TagID::Compound,
                    actual: other.id(),
                }),
            },
            Some((Segment::Key(key), rest)) => match rest.split_last() {
                None => set_child(self, key, value),
                Some((last, parents)) => {
                    assign(walk_mut(child_mut(self, key)?, parents, last)?, last, value)
                }
            },
            Some((segment, _)) => Err(step_error(TagID::Compound, segment)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(path: &Path) -> Vec<String> {
        path.segments()
            .iter()
            .map(|segment| match segment {
                Segment::Key(key) => key.clone(),
                Segment::Index(index) => format!("[{index}]"),
            })
            .collect()
    }

    #[test]
    fn splits_dots_and_brackets() {
        let path = Path::parse("a.b[1][2].c").unwrap();
        assert_eq!(keys(&path), ["a", "b", "[1]", "[2]", "c"]);
    }

    #[test]
    fn runs_of_dots_and_empty_segments_are_dropped() {
        let path = Path::parse("..a...b.").unwrap();
        assert_eq!(keys(&path), ["a", "b"]);
        assert!(Path::parse("").unwrap().is_empty());
    }

    #[test]
    fn quotes_protect_separators() {
        let path = Path::parse("\"a.b[0]\".c").unwrap();
        assert_eq!(keys(&path), ["a.b[0]", "c"]);
    }

    #[test]
    fn bad_brackets() {
        assert!(matches!(Path::parse("a[x]"), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::parse("a[-1]"), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::parse("a[1"), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::parse("a[+1]"), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::parse("a[]"), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::from_parts(["[+1]"]), Err(Error::InvalidPath(_))));
        assert!(matches!(Path::parse("\"a"), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn display_round_trips() {
        for src in ["a.b[1].c", "[0][1]", "\"x.y\"[3]", r#""say \"hi\"".b"#] {
            let path = Path::parse(src).unwrap();
            assert_eq!(path.to_string(), src);
            assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
        }
    }
}
