use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::DirectiveAnnotation;
use crate::node::InputValueDefinition;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_fields_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// An
/// [input object type definition](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// (`input Foo { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub name: String,
}
impl InputObjectTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        InputObjectTypeDefinition {
            description: None,
            directives: vec![],
            fields: vec![],
            name: name.into(),
        }
    }
}

#[inherent]
impl NamedNode for InputObjectTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(InputObjectTypeDefinition);
impl_fields_api!(InputObjectTypeDefinition, crate::node::InputValueDefinition);
impl_directives_api!(InputObjectTypeDefinition);

/// Partial props for building or updating an
/// [`InputObjectTypeDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeProps {
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub fields: Option<Vec<InputValueDefinition>>,
    pub name: String,
}
impl InputObjectTypeProps {
    pub fn new(name: impl Into<String>) -> Self {
        InputObjectTypeProps {
            description: None,
            directives: None,
            fields: None,
            name: name.into(),
        }
    }
}
impl NodeProps for InputObjectTypeProps {
    type Node = InputObjectTypeDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> InputObjectTypeDefinition {
        InputObjectTypeDefinition {
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            fields: self.fields.unwrap_or_default(),
            name: self.name,
        }
    }

    fn merge_over(self, existing: &InputObjectTypeDefinition) -> InputObjectTypeDefinition {
        InputObjectTypeDefinition {
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            fields: self.fields.unwrap_or_else(|| existing.fields.clone()),
            name: self.name,
        }
    }
}
