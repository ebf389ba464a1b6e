//! Error types for NBT and SNBT decoding, encoding and tree mutation.
//!
//! This module contains the [`Error`] type which represents every failure the
//! crate can report, and [`ErrorKind`] which groups those failures into the
//! broad categories a host usually wants to react to.
//!
//! # Example
//!
//! ```
//! use nbt_edit::{parse_binary, Error, ErrorKind};
//!
//! // A TAG_String named "" that declares 4 bytes of payload but carries 1.
//! let data = [0x08, 0x00, 0x00, 0x00, 0x04, b'a'];
//! match parse_binary(&data) {
//!     Err(e) if e.kind() == ErrorKind::Format => {
//!         assert!(matches!(e, Error::EndOfFile));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use std::fmt::{self, Display};

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The category an [`Error`] belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed or truncated binary input, or a tree that cannot be encoded.
    Format,
    /// Malformed SNBT text or path expression.
    Syntax,
    /// A value of the wrong kind was written into a typed container, or a
    /// path stepped into a value that cannot be navigated that way.
    TypeMismatch,
    /// A compound lookup by name missed.
    TagNotFound,
    /// A path key segment missed.
    KeyError,
    /// A list or array index missed.
    IndexOutOfBounds,
    /// A compound already holds a child with that name.
    DuplicateTag,
    /// A compound child name is empty.
    InvalidName,
    /// The top-level value of a document is not a compound.
    InvalidDocument,
    /// The underlying writer failed.
    Io,
}

/// This type represents all possible errors that can occur when reading,
/// writing or modifying NBT data.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while writing to a [`std::io::Write`].
    IO(std::io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or when a length
    /// field points past the end of the buffer.
    EndOfFile,

    /// Extra bytes remain after the top-level tag.
    TrailingData(usize),

    /// NBT defines tag types 0-12; any other byte in a kind position is
    /// reported with its value.
    InvalidTagType(u8),

    /// A name or string payload is neither UTF-8 nor modified UTF-8.
    InvalidString,

    /// A count field was negative.
    NegativeLength(i32),

    /// A list declared End as its element kind but a non-zero count.
    InvalidListElement(i32),

    /// A string is longer than the 65535 bytes its length prefix can hold.
    StringTooLong(usize),

    /// A list or array has more elements than its `i32` count can hold.
    ListTooLong(usize),

    /// A compound read from binary input holds two children with one name.
    DuplicateName(String),

    /// A compound read from binary input holds a child with an empty name.
    EmptyName,

    /// SNBT text could not be parsed.
    Syntax { offset: usize, message: String },

    /// A path expression is malformed.
    InvalidPath(String),

    /// A typed container received a value of another kind.
    TypeMismatch { expected: TagID, actual: TagID },

    /// A path index segment met a value that is not a list or array.
    NotIndexable(TagID),

    /// A path key segment met a value that is not a compound.
    NotCompound(TagID),

    TagNotFound(String),

    KeyError(String),

    IndexOutOfBounds { index: usize, len: usize },

    DuplicateTag(String),

    /// A compound child name was empty.
    InvalidName,

    /// A document's top-level value must be a compound.
    InvalidDocument(TagID),
}

impl Error {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IO(_) => ErrorKind::Io,
            Error::EndOfFile
            | Error::TrailingData(_)
            | Error::InvalidTagType(_)
            | Error::InvalidString
            | Error::NegativeLength(_)
            | Error::InvalidListElement(_)
            | Error::StringTooLong(_)
            | Error::ListTooLong(_)
            | Error::DuplicateName(_)
            | Error::EmptyName => ErrorKind::Format,
            Error::Syntax { .. } | Error::InvalidPath(_) => ErrorKind::Syntax,
            Error::TypeMismatch { .. } | Error::NotIndexable(_) | Error::NotCompound(_) => {
                ErrorKind::TypeMismatch
            }
            Error::TagNotFound(_) => ErrorKind::TagNotFound,
            Error::KeyError(_) => ErrorKind::KeyError,
            Error::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Error::DuplicateTag(_) => ErrorKind::DuplicateTag,
            Error::InvalidName => ErrorKind::InvalidName,
            Error::InvalidDocument(_) => ErrorKind::InvalidDocument,
        }
    }

    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            offset,
            message: message.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::InvalidString => formatter.write_str("string is not valid (modified) UTF-8"),
            Error::NegativeLength(len) => formatter.write_str(&format!("negative length: {len}")),
            Error::InvalidListElement(len) => formatter.write_str(&format!(
                "list of TAG_End cannot hold elements, found {len}"
            )),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string too long: {len} bytes"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::DuplicateName(name) => {
                formatter.write_str(&format!("duplicate compound entry: {name:?}"))
            }
            Error::EmptyName => formatter.write_str("compound entry with an empty name"),
            Error::Syntax { offset, message } => {
                formatter.write_str(&format!("syntax error at offset {offset}: {message}"))
            }
            Error::InvalidPath(path) => formatter.write_str(&format!("invalid path: {path:?}")),
            Error::TypeMismatch { expected, actual } => formatter.write_str(&format!(
                "tag type mismatch: expected {expected}, got {actual}"
            )),
            Error::NotIndexable(tag) => {
                formatter.write_str(&format!("cannot index into {tag}"))
            }
            Error::NotCompound(tag) => {
                formatter.write_str(&format!("cannot access a key on {tag}"))
            }
            Error::TagNotFound(name) => formatter.write_str(&format!("tag not found: {name:?}")),
            Error::KeyError(key) => formatter.write_str(&format!("no such key: {key:?}")),
            Error::IndexOutOfBounds { index, len } => formatter.write_str(&format!(
                "index out of bounds: {index} (length {len})"
            )),
            Error::DuplicateTag(name) => {
                formatter.write_str(&format!("tag already exists: {name:?}"))
            }
            Error::InvalidName => formatter.write_str("compound entry name cannot be empty"),
            Error::InvalidDocument(tag) => formatter.write_str(&format!(
                "document root must be TAG_Compound, found {tag}"
            )),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}
