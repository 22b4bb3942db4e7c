use pretty_assertions::assert_eq;

use super::*;

fn form(shape: Shape, value: &Value) -> Result<Value, NotApplicable> {
    build_form(shape, value, value.is_hashable())
}

#[test]
fn labels_in_table_order() {
    let labels: Vec<_> = Shape::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec![
            "String",
            "Integer",
            "List",
            "Tuple",
            "Set",
            "Dict (as Key)",
            "Dict (as Val)"
        ]
    );
}

// === Integer cast ===

#[test]
fn integer_cast_accepts_plain_digits() {
    assert_eq!(integer_cast("2506"), Some(2506));
    assert_eq!(integer_cast("-42"), Some(-42));
    assert_eq!(integer_cast("007"), Some(7));
}

#[test]
fn integer_cast_rejects_everything_else() {
    for text in ["", "-", "1.89", "+5", "--1", " 1", "nome", "1_000", "99999999999999999999"] {
        assert_eq!(integer_cast(text), None, "{text:?}");
    }
}

// === Forms ===

#[test]
fn string_form_uses_raw_text() {
    assert_eq!(form(Shape::String, &Value::Int(2506)).unwrap(), Value::string("2506"));
    assert_eq!(
        form(Shape::String, &Value::string("nome")).unwrap(),
        Value::string("nome")
    );
}

#[test]
fn integer_form_from_numeric_text() {
    assert_eq!(form(Shape::Integer, &Value::string("2506")).unwrap(), Value::Int(2506));
    assert_eq!(
        form(Shape::Integer, &Value::Float(1.89)),
        Err(NotApplicable::NotInteger)
    );
    assert_eq!(
        form(Shape::Integer, &Value::Bool(true)),
        Err(NotApplicable::NotInteger)
    );
}

#[test]
fn wrapping_forms_share_the_value() {
    let value = Value::list(vec![Value::Int(1)]);
    assert_eq!(form(Shape::List, &value).unwrap().to_string(), "[[1]]");
    assert_eq!(form(Shape::Tuple, &value).unwrap().to_string(), "([1],)");
    assert_eq!(
        form(Shape::DictVal, &value).unwrap().to_string(),
        "{'key': [1]}"
    );
}

#[test]
fn hashed_forms_need_a_hashable_value() {
    let value = Value::list(vec![Value::Int(1)]);
    assert_eq!(form(Shape::Set, &value), Err(NotApplicable::Unhashable));
    assert_eq!(form(Shape::DictKey, &value), Err(NotApplicable::Unhashable));

    let key = Value::tuple(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(form(Shape::Set, &key).unwrap().to_string(), "{(1, 2)}");
    assert_eq!(form(Shape::DictKey, &key).unwrap().to_string(), "{(1, 2): 0}");
}

#[test]
fn wrong_hashable_flag_is_caught_by_the_factory() {
    let value = Value::map(Vec::new()).unwrap();
    assert_eq!(
        build_form(Shape::Set, &value, true),
        Err(NotApplicable::Unhashable)
    );
    assert_eq!(
        build_form(Shape::DictKey, &value, true),
        Err(NotApplicable::Unhashable)
    );
}

#[test]
fn flag_false_skips_hashable_value() {
    assert_eq!(
        build_form(Shape::Set, &Value::Int(1), false),
        Err(NotApplicable::Unhashable)
    );
}
