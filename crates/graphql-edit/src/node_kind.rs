/// The closed set of `kind` tags carried by the node model in
/// [`crate::node`].
///
/// Kind names follow the GraphQL specification's node naming (e.g.
/// `InputValueDefinition`, `NonNullType`) so that diagnostics read
/// the way the grammar does.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NodeKind {
    Argument,
    BooleanValue,
    DirectiveAnnotation,
    EnumTypeDefinition,
    EnumValue,
    EnumValueDefinition,
    FieldDefinition,
    FloatValue,
    InputObjectTypeDefinition,
    InputValueDefinition,
    IntValue,
    ListType,
    ListValue,
    NamedType,
    NonNullType,
    NullValue,
    ObjectField,
    ObjectTypeDefinition,
    ObjectValue,
    StringValue,
    Variable,
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Argument => "Argument",
            Self::BooleanValue => "BooleanValue",
            Self::DirectiveAnnotation => "DirectiveAnnotation",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumValue => "EnumValue",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::FloatValue => "FloatValue",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::IntValue => "IntValue",
            Self::ListType => "ListType",
            Self::ListValue => "ListValue",
            Self::NamedType => "NamedType",
            Self::NonNullType => "NonNullType",
            Self::NullValue => "NullValue",
            Self::ObjectField => "ObjectField",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ObjectValue => "ObjectValue",
            Self::StringValue => "StringValue",
            Self::Variable => "Variable",
        })
    }
}
