use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::DirectiveAnnotation;
use crate::node::TypeRef;
use crate::node::Value;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// An
/// [input value definition](https://spec.graphql.org/October2021/#InputValueDefinition):
/// an argument definition on a field, or a field of an input object
/// type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub of_type: TypeRef,
}
impl InputValueDefinition {
    pub fn new(name: impl Into<String>, of_type: TypeRef) -> Self {
        InputValueDefinition {
            default_value: None,
            description: None,
            directives: vec![],
            name: name.into(),
            of_type,
        }
    }
}

#[inherent]
impl NamedNode for InputValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(InputValueDefinition);
impl_directives_api!(InputValueDefinition);

/// Partial props for building or updating an
/// [`InputValueDefinition`].
///
/// `name` and `of_type` always apply; `None` fields fall back to
/// defaults on build and keep the existing node's values on merge.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueProps {
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub name: String,
    pub of_type: TypeRef,
}
impl InputValueProps {
    pub fn new(name: impl Into<String>, of_type: TypeRef) -> Self {
        InputValueProps {
            default_value: None,
            description: None,
            directives: None,
            name: name.into(),
            of_type,
        }
    }
}
impl NodeProps for InputValueProps {
    type Node = InputValueDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> InputValueDefinition {
        InputValueDefinition {
            default_value: self.default_value,
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            name: self.name,
            of_type: self.of_type,
        }
    }

    fn merge_over(self, existing: &InputValueDefinition) -> InputValueDefinition {
        InputValueDefinition {
            default_value: self
                .default_value
                .or_else(|| existing.default_value.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            name: self.name,
            of_type: self.of_type,
        }
    }
}
