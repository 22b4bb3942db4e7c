use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;

use super::*;

fn hash_value(v: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

fn ints(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::Int).collect()
}

// Rendering

#[test]
fn display_scalars() {
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Int(-2506).to_string(), "-2506");
    assert_eq!(Value::Float(1.89).to_string(), "1.89");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
}

#[test]
fn display_containers() {
    let list = Value::list(ints(&[1, 2, 3]));
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(Value::list(vec![list]).to_string(), "[[1, 2, 3]]");
    assert_eq!(Value::tuple(ints(&[10, 200])).to_string(), "(10, 200)");
    assert_eq!(
        Value::list(vec![Value::string("nome")]).to_string(),
        "['nome']"
    );
}

#[test]
fn display_single_element_tuple_has_trailing_comma() {
    assert_eq!(Value::tuple(ints(&[2506])).to_string(), "(2506,)");
    assert_eq!(Value::tuple(vec![]).to_string(), "()");
}

#[test]
fn display_sets_and_maps() {
    let set = Value::set(ints(&[2506])).unwrap();
    assert_eq!(set.to_string(), "{2506}");
    assert_eq!(Value::set(vec![]).unwrap().to_string(), "set()");

    let map = Value::map(vec![(Value::string("key"), Value::Float(1.89))]).unwrap();
    assert_eq!(map.to_string(), "{'key': 1.89}");
    assert_eq!(Value::map(vec![]).unwrap().to_string(), "{}");
}

#[test]
fn to_text_leaves_strings_bare() {
    assert_eq!(Value::string("nome").to_text(), "nome");
    assert_eq!(Value::Int(2506).to_text(), "2506");
    assert_eq!(
        Value::tuple(vec![Value::string("a")]).to_text(),
        "('a',)"
    );
}

// Hashability

#[test]
fn scalars_and_strings_are_hashable() {
    assert!(Value::None.is_hashable());
    assert!(Value::Bool(true).is_hashable());
    assert!(Value::Int(1).is_hashable());
    assert!(Value::Float(1.5).is_hashable());
    assert!(Value::string("x").is_hashable());
}

#[test]
fn mutable_containers_are_not_hashable() {
    assert!(!Value::list(vec![]).is_hashable());
    assert!(!Value::set(vec![]).unwrap().is_hashable());
    assert!(!Value::map(vec![]).unwrap().is_hashable());
}

#[test]
fn tuple_hashability_follows_elements() {
    assert!(Value::tuple(ints(&[10, 200])).is_hashable());
    let mixed = Value::tuple(vec![Value::Int(1), Value::list(ints(&[2]))]);
    assert!(!mixed.is_hashable());
}

// Factories

#[test]
fn set_drops_duplicates_in_order() {
    let set = Value::set(ints(&[3, 1, 3, 2, 1])).unwrap();
    assert_eq!(set, Value::set(ints(&[3, 1, 2])).unwrap());
}

#[test]
fn set_rejects_unhashable_member() {
    let err = Value::set(vec![Value::Int(1), Value::list(vec![])]).unwrap_err();
    assert_eq!(err, Unhashable { type_name: "list" });
    assert_eq!(err.to_string(), "unhashable type: 'list'");
}

#[test]
fn set_rejects_tuple_holding_a_list() {
    let nested = Value::tuple(vec![Value::list(vec![])]);
    assert_eq!(
        Value::set(vec![nested]).unwrap_err(),
        Unhashable { type_name: "list" }
    );
}

#[test]
fn map_last_value_wins_first_position_kept() {
    let map = Value::map(vec![
        (Value::string("a"), Value::Int(1)),
        (Value::string("b"), Value::Int(2)),
        (Value::string("a"), Value::Int(3)),
    ])
    .unwrap();
    assert_eq!(map.to_string(), "{'a': 3, 'b': 2}");
}

#[test]
fn map_rejects_unhashable_key() {
    let err = Value::map(vec![(Value::map(vec![]).unwrap(), Value::Int(0))]).unwrap_err();
    assert_eq!(err.type_name, "map");
}

#[test]
fn map_accepts_unhashable_value() {
    let map = Value::map(vec![(Value::string("key"), Value::list(ints(&[1])))]).unwrap();
    assert_eq!(map.to_string(), "{'key': [1]}");
}

// Equality and hashing

#[test]
fn equal_values_hash_equal() {
    assert_eq!(hash_value(&Value::Int(42)), hash_value(&Value::Int(42)));
    assert_eq!(
        hash_value(&Value::string("nome")),
        hash_value(&Value::string("nome"))
    );
    assert_eq!(
        hash_value(&Value::tuple(ints(&[1, 2]))),
        hash_value(&Value::tuple(ints(&[1, 2])))
    );
    assert_eq!(hash_value(&Value::Float(0.0)), hash_value(&Value::Float(-0.0)));
}

#[test]
fn list_and_tuple_with_same_items_differ() {
    assert_ne!(Value::list(ints(&[1])), Value::tuple(ints(&[1])));
}

#[test]
fn clones_share_heap_storage() {
    let original = Value::string("shared");
    let copy = original.clone();
    match (&original, &copy) {
        (Value::Str(a), Value::Str(b)) => assert!(a.ptr_eq(b)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn accessors() {
    assert_eq!(Value::None.type_name(), "none");
}

#[test]
fn factories_trim_buffers() {
    let mut text = String::with_capacity(64);
    text.push_str("nome");
    let Value::Str(s) = Value::string(text) else {
        panic!("expected a string");
    };
    assert_eq!(s.capacity(), 4);

    let mut items = Vec::with_capacity(16);
    items.push(Value::Int(1));
    let Value::List(buf) = Value::list(items) else {
        panic!("expected a list");
    };
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.capacity(), 1);
}
