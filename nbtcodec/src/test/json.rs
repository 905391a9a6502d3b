use serde_json::json;

use crate::{List, NamedTag, Tag, Value};

#[test]
fn named_tag_to_json() {
    let tag = NamedTag::compound(
        "root",
        vec![
            NamedTag::byte("b", 1),
            NamedTag::byte_array("bytes", vec![1i8, -2]),
            NamedTag::list("l", List::new(Tag::Int, vec![Value::Int(2)]).unwrap()),
        ],
    );

    let expected = json!({
        "name": "root",
        "value": {
            "Compound": [
                { "name": "b", "value": { "Byte": 1 } },
                { "name": "bytes", "value": { "ByteArray": [1, -2] } },
                {
                    "name": "l",
                    "value": { "List": { "element": "Int", "items": [{ "Int": 2 }] } }
                }
            ]
        }
    });

    assert_eq!(serde_json::to_value(&tag).unwrap(), expected);
}

#[test]
fn unnamed_is_null() {
    let tag = NamedTag::new(None, Value::String("s".into()));
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        json!({ "name": null, "value": { "String": "s" } })
    );
}
