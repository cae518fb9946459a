//! Tests for the per-kind facades over the collection engine.

use crate::EditError;
use crate::NodeKind;
use crate::node::Argument;
use crate::node::DirectiveAnnotation;
use crate::node::EnumTypeDefinition;
use crate::node::EnumValueProps;
use crate::node::FieldDefinition;
use crate::node::FieldDefinitionProps;
use crate::node::InputObjectTypeDefinition;
use crate::node::InputValueDefinition;
use crate::node::InputValueProps;
use crate::node::ObjectTypeDefinition;
use crate::node::TypeRef;
use crate::node::Value;

/// The canonical scenario: an empty `arguments` slot; create succeeds
/// and appends; a second create with the same name conflicts; upsert
/// with the same name replaces in place.
#[test]
fn directive_annotation_argument_lifecycle() {
    let mut annot = DirectiveAnnotation::new("paginate");

    annot
        .create_argument(Argument::new("limit", Value::Int(10)))
        .unwrap();
    assert_eq!(annot.argument_names(), vec!["limit"]);

    assert_eq!(
        annot.create_argument(Argument::new("limit", Value::Int(20))),
        Err(EditError::Conflict {
            name: "limit".to_string(),
            parent: "paginate".to_string(),
            slot: "arguments",
        }),
    );

    annot.upsert_argument(Argument::new("limit", Value::Int(20)));
    assert_eq!(annot.argument_names(), vec!["limit"]);
    assert_eq!(
        annot.argument("limit").unwrap().value,
        Value::Int(20),
    );
}

#[test]
fn directive_annotation_arguments_chain_with_question_mark() -> Result<(), EditError> {
    let mut annot = DirectiveAnnotation::new("paginate");

    annot
        .create_argument(Argument::new("limit", Value::Int(10)))?
        .create_argument(Argument::new("offset", Value::Int(0)))?
        .remove_argument("offset")?;

    assert_eq!(annot.argument_names(), vec!["limit"]);
    assert!(!annot.has_argument("offset"));
    Ok(())
}

#[test]
fn field_definition_arguments_hold_input_value_definitions() {
    let mut field = FieldDefinition::new("users", TypeRef::named("User"));

    field
        .create_argument(InputValueDefinition::new("first", TypeRef::named("Int")))
        .unwrap()
        .create_argument(InputValueDefinition::new("after", TypeRef::named("String")))
        .unwrap();

    assert_eq!(field.argument_names(), vec!["first", "after"]);
    assert_eq!(
        field.argument("after").unwrap().of_type,
        TypeRef::named("String"),
    );
}

/// Partial props: updating one aspect of an argument definition keeps
/// the rest of the existing node.
#[test]
fn update_argument_with_partial_props_merges_over_the_existing_node() {
    let mut field = FieldDefinition::new("users", TypeRef::named("User"));

    let mut first = InputValueDefinition::new("first", TypeRef::named("Int"));
    first.default_value = Some(Value::Int(25));
    first.description = Some("Page size".to_string());
    field.create_argument(first).unwrap();

    field
        .update_argument(
            "first",
            InputValueProps {
                description: Some("Max page size".to_string()),
                ..InputValueProps::new("first", TypeRef::named("Int"))
            },
        )
        .unwrap();

    let updated = field.argument("first").unwrap();
    assert_eq!(updated.description.as_deref(), Some("Max page size"));
    // Omitted props keep the existing node's values.
    assert_eq!(updated.default_value, Some(Value::Int(25)));
}

#[test]
fn object_type_field_lifecycle_and_in_place_type_rewrites() {
    let mut object_type = ObjectTypeDefinition::new("User");

    object_type
        .create_field(FieldDefinition::new("id", TypeRef::named("ID")))
        .unwrap()
        .create_field(FieldDefinition::new("name", TypeRef::named("String")))
        .unwrap();
    assert_eq!(object_type.field_names(), vec!["id", "name"]);

    // The slot still points at the same node after the wrapper
    // rewrite; no re-insertion happens.
    object_type
        .field_mut("id")
        .unwrap()
        .of_type
        .set_non_null(true);
    assert_eq!(
        object_type.field("id").unwrap().of_type.to_string(),
        "ID!",
    );

    object_type.remove_field("name").unwrap();
    assert!(!object_type.has_field("name"));
}

#[test]
fn update_field_with_partial_props_preserves_position_and_arguments() {
    let mut object_type = ObjectTypeDefinition::new("Query");

    let mut users = FieldDefinition::new("users", TypeRef::named("User"));
    users.arguments = vec![InputValueDefinition::new("first", TypeRef::named("Int"))];
    object_type.create_field(users).unwrap();
    object_type
        .create_field(FieldDefinition::new("version", TypeRef::named("String")))
        .unwrap();

    object_type
        .update_field(
            "users",
            FieldDefinitionProps {
                description: Some("All users".to_string()),
                ..FieldDefinitionProps::new(
                    "users",
                    TypeRef::list(TypeRef::named("User")),
                )
            },
        )
        .unwrap();

    assert_eq!(object_type.field_names(), vec!["users", "version"]);
    let updated = object_type.field("users").unwrap();
    assert_eq!(updated.of_type.to_string(), "[User]");
    assert_eq!(updated.description.as_deref(), Some("All users"));
    assert_eq!(updated.argument_names(), vec!["first"]);
}

#[test]
fn directives_facade_is_shared_across_parent_kinds() {
    let mut field = FieldDefinition::new("name", TypeRef::named("String"));
    let mut object_type = ObjectTypeDefinition::new("User");

    let mut deprecated = DirectiveAnnotation::new("deprecated");
    deprecated.arguments = vec![Argument::new(
        "reason",
        Value::String("legacy".to_string()),
    )];

    field.create_directive(deprecated.clone()).unwrap();
    object_type.create_directive(deprecated).unwrap();

    assert_eq!(field.directive_names(), vec!["deprecated"]);
    assert_eq!(object_type.directive_names(), vec!["deprecated"]);
    assert_eq!(
        field
            .directive("deprecated")
            .unwrap()
            .argument("reason")
            .unwrap()
            .value
            .as_str(),
        Some("legacy"),
    );

    field.remove_directive("deprecated").unwrap();
    assert!(!field.has_directive("deprecated"));
    assert!(object_type.has_directive("deprecated"));
}

#[test]
fn enum_type_value_lifecycle() {
    let mut enum_type = EnumTypeDefinition::new("Role");

    enum_type
        .create_value(EnumValueProps::new("ADMIN"))
        .unwrap()
        .create_value(EnumValueProps::new("MEMBER"))
        .unwrap();
    assert_eq!(enum_type.value_names(), vec!["ADMIN", "MEMBER"]);

    enum_type
        .update_value(
            "MEMBER",
            EnumValueProps {
                description: Some("A regular member".to_string()),
                ..EnumValueProps::new("MEMBER")
            },
        )
        .unwrap();
    assert_eq!(
        enum_type.value("MEMBER").unwrap().description.as_deref(),
        Some("A regular member"),
    );

    // Upsert of an unknown name appends.
    enum_type.upsert_value(EnumValueProps::new("GUEST"));
    assert_eq!(enum_type.value_names(), vec!["ADMIN", "MEMBER", "GUEST"]);

    enum_type.remove_value("ADMIN").unwrap();
    assert_eq!(enum_type.value_names(), vec!["MEMBER", "GUEST"]);
    assert_eq!(
        enum_type.remove_value("ADMIN").unwrap_err(),
        EditError::NotFound {
            name: "ADMIN".to_string(),
            parent: "Role".to_string(),
            slot: "values",
        },
    );
}

#[test]
fn named_nodes_report_their_kind_tags() {
    assert_eq!(
        Argument::new("a", Value::Null).kind(),
        NodeKind::Argument,
    );
    assert_eq!(
        DirectiveAnnotation::new("deprecated").kind(),
        NodeKind::DirectiveAnnotation,
    );
    assert_eq!(
        FieldDefinition::new("id", TypeRef::named("ID")).kind(),
        NodeKind::FieldDefinition,
    );
    assert_eq!(
        ObjectTypeDefinition::new("User").node_name(),
        "User",
    );
}

#[test]
fn input_object_fields_are_input_value_definitions() {
    let mut input_type = InputObjectTypeDefinition::new("UserFilter");

    input_type
        .create_field(InputValueDefinition::new(
            "nameContains",
            TypeRef::named("String"),
        ))
        .unwrap();

    input_type
        .update_field(
            "nameContains",
            InputValueProps {
                default_value: Some(Value::String(String::new())),
                ..InputValueProps::new("nameContains", TypeRef::named("String"))
            },
        )
        .unwrap();

    assert_eq!(input_type.field_names(), vec!["nameContains"]);
    assert_eq!(
        input_type.field("nameContains").unwrap().default_value,
        Some(Value::String(String::new())),
    );
}
