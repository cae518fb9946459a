use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::DirectiveAnnotation;
use crate::node::InputValueDefinition;
use crate::node::TypeRef;
use crate::node::mixins::impl_arguments_api;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// A
/// [field definition](https://spec.graphql.org/October2021/#FieldDefinition)
/// on an object or interface type.
///
/// The field's type reference is reachable (and rewritable in place)
/// through the public `of_type` field, e.g.
///
/// ```rust
/// # use graphql_edit::node::FieldDefinition;
/// # use graphql_edit::node::TypeRef;
/// let mut field = FieldDefinition::new("id", TypeRef::named("ID"));
/// field.of_type.set_non_null(true);
/// assert_eq!(field.of_type.to_string(), "ID!");
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub of_type: TypeRef,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, of_type: TypeRef) -> Self {
        FieldDefinition {
            arguments: vec![],
            description: None,
            directives: vec![],
            name: name.into(),
            of_type,
        }
    }
}

#[inherent]
impl NamedNode for FieldDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(FieldDefinition);
impl_arguments_api!(FieldDefinition, crate::node::InputValueDefinition);
impl_directives_api!(FieldDefinition);

/// Partial props for building or updating a [`FieldDefinition`].
///
/// `name` and `of_type` always apply; `None` fields fall back to
/// defaults on build and keep the existing node's values on merge.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinitionProps {
    pub arguments: Option<Vec<InputValueDefinition>>,
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub name: String,
    pub of_type: TypeRef,
}
impl FieldDefinitionProps {
    pub fn new(name: impl Into<String>, of_type: TypeRef) -> Self {
        FieldDefinitionProps {
            arguments: None,
            description: None,
            directives: None,
            name: name.into(),
            of_type,
        }
    }
}
impl NodeProps for FieldDefinitionProps {
    type Node = FieldDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> FieldDefinition {
        FieldDefinition {
            arguments: self.arguments.unwrap_or_default(),
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            name: self.name,
            of_type: self.of_type,
        }
    }

    fn merge_over(self, existing: &FieldDefinition) -> FieldDefinition {
        FieldDefinition {
            arguments: self
                .arguments
                .unwrap_or_else(|| existing.arguments.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            name: self.name,
            of_type: self.of_type,
        }
    }
}
