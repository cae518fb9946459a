use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::DirectiveAnnotation;
use crate::node::FieldDefinition;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_fields_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// An
/// [object type definition](https://spec.graphql.org/October2021/#sec-Objects)
/// (`type Foo { ... }`).
///
/// `interfaces` holds the names of the interface types this type
/// implements, in declaration order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<String>,
    pub name: String,
}
impl ObjectTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectTypeDefinition {
            description: None,
            directives: vec![],
            fields: vec![],
            interfaces: vec![],
            name: name.into(),
        }
    }
}

#[inherent]
impl NamedNode for ObjectTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(ObjectTypeDefinition);
impl_fields_api!(ObjectTypeDefinition, crate::node::FieldDefinition);
impl_directives_api!(ObjectTypeDefinition);

/// Partial props for building or updating an
/// [`ObjectTypeDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeProps {
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub fields: Option<Vec<FieldDefinition>>,
    pub interfaces: Option<Vec<String>>,
    pub name: String,
}
impl ObjectTypeProps {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectTypeProps {
            description: None,
            directives: None,
            fields: None,
            interfaces: None,
            name: name.into(),
        }
    }
}
impl NodeProps for ObjectTypeProps {
    type Node = ObjectTypeDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> ObjectTypeDefinition {
        ObjectTypeDefinition {
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            fields: self.fields.unwrap_or_default(),
            interfaces: self.interfaces.unwrap_or_default(),
            name: self.name,
        }
    }

    fn merge_over(self, existing: &ObjectTypeDefinition) -> ObjectTypeDefinition {
        ObjectTypeDefinition {
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            fields: self.fields.unwrap_or_else(|| existing.fields.clone()),
            interfaces: self
                .interfaces
                .unwrap_or_else(|| existing.interfaces.clone()),
            name: self.name,
        }
    }
}
