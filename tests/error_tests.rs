//! Tests for Error display and classification

use std::error::Error as _;
use std::io;

use nbt_edit::{Error, ErrorKind, TagID};

#[test]
fn test_error_kinds() {
    let cases = [
        (Error::EndOfFile, ErrorKind::Format),
        (Error::TrailingData(3), ErrorKind::Format),
        (Error::InvalidTagType(0x20), ErrorKind::Format),
        (Error::InvalidString, ErrorKind::Format),
        (Error::NegativeLength(-1), ErrorKind::Format),
        (Error::InvalidListElement(2), ErrorKind::Format),
        (Error::StringTooLong(70_000), ErrorKind::Format),
        (Error::ListTooLong(usize::MAX), ErrorKind::Format),
        (Error::DuplicateName("a".into()), ErrorKind::Format),
        (Error::EmptyName, ErrorKind::Format),
        (
            Error::Syntax {
                offset: 4,
                message: "x".into(),
            },
            ErrorKind::Syntax,
        ),
        (Error::InvalidPath("a[".into()), ErrorKind::Syntax),
        (
            Error::TypeMismatch {
                expected: TagID::Int,
                actual: TagID::Byte,
            },
            ErrorKind::TypeMismatch,
        ),
        (Error::NotIndexable(TagID::Int), ErrorKind::TypeMismatch),
        (Error::NotCompound(TagID::List), ErrorKind::TypeMismatch),
        (Error::TagNotFound("a".into()), ErrorKind::TagNotFound),
        (Error::KeyError("a".into()), ErrorKind::KeyError),
        (
            Error::IndexOutOfBounds { index: 3, len: 3 },
            ErrorKind::IndexOutOfBounds,
        ),
        (Error::DuplicateTag("a".into()), ErrorKind::DuplicateTag),
        (Error::InvalidName, ErrorKind::InvalidName),
        (Error::InvalidDocument(TagID::List), ErrorKind::InvalidDocument),
    ];
    for (error, kind) in cases {
        assert_eq!(error.kind(), kind, "{error}");
    }
}

#[test]
fn test_error_display() {
    assert_eq!(Error::EndOfFile.to_string(), "unexpected end of input");
    assert_eq!(
        Error::TrailingData(2).to_string(),
        "trailing data after end of input: 2 bytes remaining"
    );
    assert_eq!(
        Error::InvalidTagType(0x0d).to_string(),
        "invalid NBT tag type: 0x0d"
    );
    assert_eq!(
        Error::TypeMismatch {
            expected: TagID::Int,
            actual: TagID::String
        }
        .to_string(),
        "tag type mismatch: expected TAG_Int, got TAG_String"
    );
    assert_eq!(
        Error::IndexOutOfBounds { index: 5, len: 2 }.to_string(),
        "index out of bounds: 5 (length 2)"
    );
    assert!(
        Error::Syntax {
            offset: 7,
            message: "unterminated string".into()
        }
        .to_string()
        .contains("offset 7")
    );
}

#[test]
fn test_io_error_source() {
    let error = Error::from(io::Error::other("disk full"));
    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.to_string(), "disk full");
    assert!(error.source().is_some());
    assert!(Error::EndOfFile.source().is_none());
}
