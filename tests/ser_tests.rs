//! Tests for serde serialization of the tag model
#![cfg(feature = "serde")]

use nbt_edit::{Document, NamedTag, Value, parse_text};
use serde_json::json;

#[test]
fn test_scalars_and_strings() {
    assert_eq!(serde_json::to_value(Value::Byte(-1)).unwrap(), json!(-1));
    assert_eq!(serde_json::to_value(Value::Long(1 << 40)).unwrap(), json!(1u64 << 40));
    assert_eq!(serde_json::to_value(Value::Double(0.5)).unwrap(), json!(0.5));
    assert_eq!(serde_json::to_value(Value::from("hi")).unwrap(), json!("hi"));
    assert_eq!(serde_json::to_value(Value::End).unwrap(), json!(null));
}

#[test]
fn test_containers() {
    let value = parse_text(r#"{z: [B; 1b, 2b], a: [{n: 1s}], m: [L; 3L], e: []}"#).unwrap();
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"z":[1,2],"a":[{"n":1}],"m":[3],"e":[]}"#
    );
}

#[test]
fn test_named_tag_and_document() {
    let tag = NamedTag::new("hello world", parse_text(r#"{name: "Bananrama"}"#).unwrap());
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        json!({"name": "hello world", "value": {"name": "Bananrama"}})
    );

    let doc = Document::try_from(tag).unwrap();
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"name": "hello world", "root": {"name": "Bananrama"}})
    );
}
