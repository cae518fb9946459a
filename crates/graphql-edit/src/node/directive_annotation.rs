use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::node::Argument;
use crate::node::mixins::impl_arguments_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// A directive *usage* annotating some other node (e.g.
/// `@deprecated(reason: "legacy")` on a field definition).
///
/// Not to be confused with a directive *definition*
/// (`directive @deprecated(...) on ...`), which declares the
/// directive itself.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub arguments: Vec<Argument>,
    pub name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveAnnotation {
            arguments: vec![],
            name: name.into(),
        }
    }
}

#[inherent]
impl NamedNode for DirectiveAnnotation {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveAnnotation
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(DirectiveAnnotation);
impl_arguments_api!(DirectiveAnnotation, crate::node::Argument);

/// Partial props for building or updating a [`DirectiveAnnotation`].
///
/// `None` fields fall back to defaults on build and keep the existing
/// node's values on merge.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotationProps {
    pub arguments: Option<Vec<Argument>>,
    pub name: String,
}
impl DirectiveAnnotationProps {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveAnnotationProps {
            arguments: None,
            name: name.into(),
        }
    }
}
impl NodeProps for DirectiveAnnotationProps {
    type Node = DirectiveAnnotation;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> DirectiveAnnotation {
        DirectiveAnnotation {
            arguments: self.arguments.unwrap_or_default(),
            name: self.name,
        }
    }

    fn merge_over(self, existing: &DirectiveAnnotation) -> DirectiveAnnotation {
        DirectiveAnnotation {
            arguments: self
                .arguments
                .unwrap_or_else(|| existing.arguments.clone()),
            name: self.name,
        }
    }
}
