use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::DirectiveAnnotation;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// One value declared by an enum type definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
}
impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValueDefinition {
            description: None,
            directives: vec![],
            name: name.into(),
        }
    }
}

#[inherent]
impl NamedNode for EnumValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(EnumValueDefinition);
impl_directives_api!(EnumValueDefinition);

/// Partial props for building or updating an [`EnumValueDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueProps {
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub name: String,
}
impl EnumValueProps {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValueProps {
            description: None,
            directives: None,
            name: name.into(),
        }
    }
}
impl NodeProps for EnumValueProps {
    type Node = EnumValueDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> EnumValueDefinition {
        EnumValueDefinition {
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            name: self.name,
        }
    }

    fn merge_over(self, existing: &EnumValueDefinition) -> EnumValueDefinition {
        EnumValueDefinition {
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            name: self.name,
        }
    }
}
