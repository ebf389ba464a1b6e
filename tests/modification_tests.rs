//! The checked mutation API of compounds, lists and typed arrays

use nbt_edit::{Compound, Error, ErrorKind, IntArray, List, TagID, Value};

#[test]
fn test_compound_add_get_remove() {
    let mut compound = Compound::new();
    compound.add("a", Value::Int(1)).unwrap();
    compound.add(String::from("b"), Value::from("two")).unwrap();
    assert_eq!(compound.len(), 2);
    assert!(compound.has("a"));
    assert_eq!(compound.get("b").unwrap(), &Value::from("two"));

    assert_eq!(compound.remove("a").unwrap(), Value::Int(1));
    assert!(!compound.has("a"));
    let err = compound.get("a").unwrap_err();
    assert!(matches!(err, Error::TagNotFound(ref name) if name == "a"));
    assert_eq!(err.kind(), ErrorKind::TagNotFound);
    assert_eq!(compound.remove("a").unwrap_err().kind(), ErrorKind::TagNotFound);
}

#[test]
fn test_compound_duplicate_add() {
    let mut compound = Compound::new();
    compound.add("a", Value::Int(1)).unwrap();
    let err = compound.add("a", Value::Int(2)).unwrap_err();
    assert!(matches!(err, Error::DuplicateTag(ref name) if name == "a"));
    assert_eq!(err.kind(), ErrorKind::DuplicateTag);
    assert_eq!(compound.get("a").unwrap(), &Value::Int(1));
    assert_eq!(compound.len(), 1);
}

#[test]
fn test_compound_rejects_empty_name_and_end() {
    let mut compound = Compound::new();
    assert!(matches!(
        compound.add("", Value::Int(1)),
        Err(Error::InvalidName)
    ));
    assert_eq!(
        compound.add("end", Value::End).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
    compound.add("x", Value::Int(1)).unwrap();
    assert_eq!(
        compound.set("x", Value::End).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
    assert_eq!(compound.len(), 1);
}

#[test]
fn test_compound_set_replaces() {
    let mut compound = Compound::new();
    compound.add("x", Value::Int(1)).unwrap();
    compound.add("y", Value::Int(2)).unwrap();
    let old = compound.set("x", Value::from("changed")).unwrap();
    assert_eq!(old, Value::Int(1));
    assert_eq!(compound.keys().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(
        compound.set("missing", Value::Int(0)).unwrap_err().kind(),
        ErrorKind::TagNotFound
    );
}

#[test]
fn test_compound_order_and_clear() {
    let mut compound = Compound::new();
    for name in ["z", "a", "m"] {
        compound.add(name, Value::Byte(0)).unwrap();
    }
    let names: Vec<_> = compound.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["z", "a", "m"]);
    compound.clear();
    assert!(compound.is_empty());
}

#[test]
fn test_compound_nested_mut() {
    let mut compound = Compound::new();
    compound.add("inner", Value::Compound(Compound::new())).unwrap();
    compound
        .add("list", Value::List(List::with_element_id(TagID::Int)))
        .unwrap();
    compound
        .get_compound_mut("inner")
        .unwrap()
        .add("v", Value::Long(5))
        .unwrap();
    compound.get_list_mut("list").unwrap().add(Value::Int(9)).unwrap();
    assert_eq!(compound.to_string(), "{inner:{v:5L},list:[9]}");
    assert_eq!(
        compound.get_list_mut("inner").unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_compound_try_from_entries() {
    let compound = Compound::try_from(vec![
        ("a".to_owned(), Value::Int(1)),
        ("b".to_owned(), Value::Int(2)),
    ])
    .unwrap();
    assert_eq!(compound.len(), 2);
    let err = Compound::try_from(vec![
        ("a".to_owned(), Value::Int(1)),
        ("a".to_owned(), Value::Int(2)),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateTag);
}

#[test]
fn test_list_kind_checks() {
    let mut list = List::with_element_id(TagID::Int);
    list.add(Value::Int(1)).unwrap();
    list.add(Value::Int(2)).unwrap();
    let before = list.clone();

    let err = list.add(Value::Byte(3)).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: TagID::Int,
            actual: TagID::Byte
        }
    ));
    assert_eq!(list.set(0, Value::from("x")).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(list, before);

    assert_eq!(list.set(1, Value::Int(20)).unwrap(), Value::Int(2));
    assert_eq!(list.get(1).unwrap(), &Value::Int(20));
}

#[test]
fn test_list_bounds() {
    let mut list = List::try_from(vec![Value::Short(1)]).unwrap();
    assert!(matches!(
        list.get(1),
        Err(Error::IndexOutOfBounds { index: 1, len: 1 })
    ));
    assert_eq!(
        list.set(5, Value::Short(0)).unwrap_err().kind(),
        ErrorKind::IndexOutOfBounds
    );
    assert_eq!(list.remove(1).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(list.remove(0).unwrap(), Value::Short(1));
    assert!(list.is_empty());
    // the element kind outlives the elements
    assert_eq!(list.element_id(), TagID::Short);
    list.add(Value::Short(2)).unwrap();
}

#[test]
fn test_end_list_stays_empty() {
    let mut list = List::new();
    assert_eq!(list.element_id(), TagID::End);
    assert_eq!(list.add(Value::Int(1)).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(list.add(Value::End).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert!(list.is_empty());
    assert_eq!(
        List::with_element_id(TagID::End)
            .add(Value::End)
            .unwrap_err()
            .kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_list_try_from_mixed() {
    let err = List::try_from(vec![Value::Int(1), Value::Long(2)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(List::try_from(Vec::new()).unwrap().element_id(), TagID::End);
}

#[test]
fn test_empty_lists_compare_equal() {
    assert_eq!(List::new(), List::with_element_id(TagID::Compound));
    let mut a = List::with_element_id(TagID::Int);
    a.add(Value::Int(1)).unwrap();
    assert_ne!(a, List::with_element_id(TagID::Int));
}

#[test]
fn test_array_operations() {
    let mut array = IntArray::from(vec![1, 2, 3]);
    assert_eq!(array.get(2).unwrap(), 3);
    assert_eq!(array.set(0, Value::Int(10)).unwrap(), 1);
    array.add(Value::Int(4)).unwrap();
    array.push(5);
    assert_eq!(array.as_slice(), [10, 2, 3, 4, 5]);
    assert_eq!(array.remove(1).unwrap(), 2);
    assert_eq!(array.len(), 4);

    assert!(matches!(
        array.add(Value::Long(1)),
        Err(Error::TypeMismatch {
            expected: TagID::Int,
            actual: TagID::Long
        })
    ));
    assert_eq!(
        array.set(9, Value::Int(0)).unwrap_err().kind(),
        ErrorKind::IndexOutOfBounds
    );
    assert_eq!(
        array.set(9, Value::Byte(0)).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
    assert_eq!(array.as_slice(), [10, 3, 4, 5]);
    assert_eq!(array.iter().sum::<i32>(), 22);
}

#[test]
fn test_value_constructors() {
    assert_eq!(Value::from(1i8), Value::Byte(1));
    assert_eq!(Value::from(1i16), Value::Short(1));
    assert_eq!(Value::from(1i32), Value::Int(1));
    assert_eq!(Value::from(1i64), Value::Long(1));
    assert_eq!(Value::from(1.0f32), Value::Float(1.0));
    assert_eq!(Value::from(1.0f64), Value::Double(1.0));
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from("s").id(), TagID::String);
    assert_eq!(Value::from(vec![1i8]).id(), TagID::ByteArray);
    assert_eq!(Value::from(vec![1i32]).id(), TagID::IntArray);
    assert_eq!(Value::from(vec![1i64]).id(), TagID::LongArray);
    assert_eq!(Value::default(), Value::End);
    assert_eq!(Value::Int(4).as_int(), Some(4));
    assert_eq!(Value::Int(4).as_long(), None);
}
