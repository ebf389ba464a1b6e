//! Tests for the TagID enum

use nbt_edit::{Error, ErrorKind, TagID};

const ALL: [TagID; 13] = [
    TagID::End,
    TagID::Byte,
    TagID::Short,
    TagID::Int,
    TagID::Long,
    TagID::Float,
    TagID::Double,
    TagID::ByteArray,
    TagID::String,
    TagID::List,
    TagID::Compound,
    TagID::IntArray,
    TagID::LongArray,
];

#[test]
fn test_tag_values() {
    for (i, tag) in ALL.iter().enumerate() {
        assert_eq!(*tag as u8, i as u8);
    }
}

#[test]
fn test_tag_try_from_u8() {
    for tag in ALL {
        assert_eq!(TagID::try_from(tag as u8).unwrap(), tag);
    }
    for byte in [13u8, 99, 255] {
        let err = TagID::try_from(byte).unwrap_err();
        assert!(matches!(err, Error::InvalidTagType(b) if b == byte));
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_tag_payload_size() {
    let fixed = [0, 1, 2, 4, 8, 4, 8];
    for (tag, size) in ALL.iter().zip(fixed) {
        assert_eq!(tag.payload_size(), Some(size));
    }
    for tag in &ALL[7..] {
        assert_eq!(tag.payload_size(), None);
    }
}

#[test]
fn test_tag_predicates() {
    for tag in ALL {
        assert_eq!(tag.is_primitive(), tag.payload_size().is_some());
        assert_eq!(
            tag.is_array(),
            matches!(tag, TagID::ByteArray | TagID::IntArray | TagID::LongArray)
        );
        assert_eq!(tag.is_composite(), matches!(tag, TagID::List | TagID::Compound));
        assert_eq!(tag.is_indexable(), tag.is_array() || tag == TagID::List);
    }
}

#[test]
fn test_tag_names() {
    assert_eq!(TagID::End.name(), "TAG_End");
    assert_eq!(TagID::Int.to_string(), "TAG_Int");
    assert_eq!(TagID::ByteArray.to_string(), "TAG_Byte_Array");
    assert_eq!(format!("{}", TagID::LongArray), "TAG_Long_Array");
}
