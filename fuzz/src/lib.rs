use nbt_edit::{
    BigEndian, LittleEndian, Value, encode_text, parse_text, read_binary, write_tag,
};

/// Anything the binary decoder accepts must encode back to the same bytes
/// in the same byte order, and must survive a trip through SNBT.
pub fn test_binary(data: &[u8]) {
    if let Ok(tag) = read_binary::<BigEndian>(data) {
        let bytes = write_tag::<BigEndian>(&tag).expect("decoded tag encodes");
        assert_eq!(bytes.len(), tag.encoded_len());
        let _ = write_tag::<LittleEndian>(&tag);
        check_text(&tag.value);
    }
    if let Ok(tag) = read_binary::<LittleEndian>(data) {
        let bytes = write_tag::<LittleEndian>(&tag).expect("decoded tag encodes");
        assert_eq!(bytes.len(), tag.encoded_len());
        let _ = write_tag::<BigEndian>(&tag);
    }
}

/// Anything the text parser accepts must print and parse back unchanged.
pub fn test_text(data: &[u8]) {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = parse_text(src) {
        check_text(&value);
    }
}

fn check_text(value: &Value) {
    if *value == Value::End || has_nan(value) {
        return;
    }
    for pretty in [false, true] {
        let text = encode_text(value, pretty);
        let reparsed = parse_text(&text).expect("printed text parses");
        assert_eq!(&reparsed, value);
    }
}

fn has_nan(value: &Value) -> bool {
    match value {
        Value::Float(value) => value.is_nan(),
        Value::Double(value) => value.is_nan(),
        Value::List(list) => list.iter().any(has_nan),
        Value::Compound(compound) => compound.iter().any(|(_, value)| has_nan(value)),
        _ => false,
    }
}

pub fn test(data: &[u8]) {
    test_binary(data);
    test_text(data);
}
