use crate::NamedNode;
use crate::NodeKind;
use crate::node::Value;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// One named entry of an object [`Value`]
/// (e.g. the `lat: 1.5` in `{lat: 1.5, lon: 2.5}`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}
impl ObjectField {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        ObjectField {
            name: name.into(),
            value,
        }
    }
}

#[inherent]
impl NamedNode for ObjectField {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(ObjectField);
