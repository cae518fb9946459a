//! Tests for [`crate::node::Value`].

use crate::EditError;
use crate::NodeKind;
use crate::node::ObjectField;
use crate::node::Value;

#[test]
fn kind_reflects_the_value_tag() {
    assert_eq!(Value::Boolean(true).kind(), NodeKind::BooleanValue);
    assert_eq!(Value::Enum("ASC".to_string()).kind(), NodeKind::EnumValue);
    assert_eq!(Value::Int(1).kind(), NodeKind::IntValue);
    assert_eq!(Value::Null.kind(), NodeKind::NullValue);
    assert_eq!(Value::Object(vec![]).kind(), NodeKind::ObjectValue);
    assert_eq!(
        Value::Variable("limit".to_string()).kind(),
        NodeKind::Variable,
    );
}

#[test]
fn as_str_unwraps_only_string_values() {
    assert_eq!(Value::String("hi".to_string()).as_str(), Some("hi"));
    assert_eq!(Value::Int(1).as_str(), None);
}

#[test]
fn object_field_crud_on_an_object_value() {
    let mut value = Value::Object(vec![]);

    value
        .create_object_field(ObjectField::new("lat", Value::Float(1.5)))
        .unwrap()
        .create_object_field(ObjectField::new("lon", Value::Float(2.5)))
        .unwrap();

    assert_eq!(value.object_field_names().unwrap(), vec!["lat", "lon"]);
    assert_eq!(
        value.object_field("lat").unwrap().value,
        Value::Float(1.5),
    );

    // Upsert replaces in place without reordering.
    value
        .upsert_object_field(ObjectField::new("lat", Value::Float(9.0)))
        .unwrap();
    assert_eq!(value.object_field_names().unwrap(), vec!["lat", "lon"]);
    assert_eq!(
        value.object_field("lat").unwrap().value,
        Value::Float(9.0),
    );

    value.remove_object_field("lat").unwrap();
    assert!(!value.has_object_field("lat"));
    assert_eq!(value.object_field_names().unwrap(), vec!["lon"]);
}

/// Object-field access is the node model's one kind-checked dynamic
/// position: invoking it on a non-object value is API misuse and
/// reports `InvalidKind`.
#[test]
fn object_field_access_on_a_non_object_value_is_invalid_kind() {
    let mut value = Value::Int(42);

    assert_eq!(
        value.object_field("lat"),
        Err(EditError::InvalidKind {
            actual: NodeKind::IntValue,
            context: "object-field access",
            expected: NodeKind::ObjectValue,
        }),
    );
    assert!(
        value
            .create_object_field(ObjectField::new("lat", Value::Null))
            .is_err()
    );
    assert!(!value.has_object_field("lat"));
}
