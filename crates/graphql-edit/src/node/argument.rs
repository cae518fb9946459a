use crate::NamedNode;
use crate::NodeKind;
use crate::node::Value;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// A single named argument attached to a directive annotation
/// (e.g. the `reason: "legacy"` in `@deprecated(reason: "legacy")`).
///
/// See
/// [Arguments](https://spec.graphql.org/October2021/#sec-Language.Arguments)
/// in the spec.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Argument {
            name: name.into(),
            value,
        }
    }
}

#[inherent]
impl NamedNode for Argument {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(Argument);
