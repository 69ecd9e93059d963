use prettify::{value, Key, Printer, Value, ValueMap};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Int(42));
    assert_eq!(value!(-123), Value::Int(-123));
    assert_eq!(value!(3.5), Value::Float(3.5));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String("".to_string()));
}

#[test]
fn test_value_macro_sequences() {
    assert_eq!(value!([]), Value::Seq(vec![]));

    let mixed = value!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Seq(vec![
            Value::Int(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_maps() {
    assert_eq!(value!({}), Value::Map(ValueMap::new()));

    let simple = value!({
        "name": "Alice",
        "age": 30
    });

    match simple {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(
                map.get(&Key::from("name")),
                Some(&Value::String("Alice".to_string()))
            );
            assert_eq!(map.get(&Key::from("age")), Some(&Value::Int(30)));
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    match nested {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 3);

            if let Some(Value::Map(user)) = map.get(&Key::from("user")) {
                assert_eq!(user.get(&Key::from("id")), Some(&Value::Int(123)));
                assert_eq!(
                    user.get(&Key::from("name")),
                    Some(&Value::String("Bob".to_string()))
                );
                assert_eq!(user.get(&Key::from("active")), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be a map");
            }

            if let Some(Value::Seq(tags)) = map.get(&Key::from("tags")) {
                assert_eq!(tags.len(), 2);
            } else {
                panic!("Expected tags to be a sequence");
            }

            assert_eq!(map.get(&Key::from("count")), Some(&Value::Int(42)));
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_value_macro_renders() {
    let data = value!({"enabled": true, "limit": 10});
    let text = Printer::plain().with_compact_map(true).format(&data);
    assert_eq!(text, "{\"enabled\": true, \"limit\": 10}");
}

#[test]
fn test_value_macro_expression_fallback() {
    let n: u16 = 7;
    assert_eq!(value!(n), Value::UInt(7));

    let owned = String::from("owned");
    assert_eq!(value!(owned), Value::String("owned".to_string()));
}
