use crate::EditError;
use crate::NamedNode;
use crate::NodeKind;
use crate::NodeProps;
use crate::collection;
use crate::collection::SlotRef;
use crate::node::DirectiveAnnotation;
use crate::node::EnumValueDefinition;
use crate::node::mixins::impl_directives_api;
use crate::node::mixins::impl_node_as_own_props;
use inherent::inherent;

/// An
/// [enum type definition](https://spec.graphql.org/October2021/#sec-Enums)
/// (`enum Foo { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub values: Vec<EnumValueDefinition>,
}
impl EnumTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        EnumTypeDefinition {
            description: None,
            directives: vec![],
            name: name.into(),
            values: vec![],
        }
    }

    /// Find the enum value named `name`.
    pub fn value(&self, name: &str) -> Result<&EnumValueDefinition, EditError> {
        collection::get(
            SlotRef::new(self.name.as_str(), "values"),
            &self.values,
            name,
        )
    }

    /// Find the enum value named `name`, mutably.
    pub fn value_mut(&mut self, name: &str) -> Result<&mut EnumValueDefinition, EditError> {
        collection::get_mut(
            SlotRef::new(self.name.as_str(), "values"),
            &mut self.values,
            name,
        )
    }

    /// The names of all enum values, in collection order.
    pub fn value_names(&self) -> Vec<&str> {
        collection::names(&self.values)
    }

    /// Indicates whether an enum value named `name` exists.
    pub fn has_value(&self, name: &str) -> bool {
        collection::has(&self.values, name)
    }

    /// Build an enum value from `props` and append it.
    pub fn create_value(
        &mut self,
        props: impl NodeProps<Node = EnumValueDefinition>,
    ) -> Result<&mut Self, EditError> {
        collection::create(
            SlotRef::new(self.name.as_str(), "values"),
            &mut self.values,
            props,
        )?;
        Ok(self)
    }

    /// Replace the enum value named `name` in place with `props`
    /// merged over it.
    pub fn update_value(
        &mut self,
        name: &str,
        props: impl NodeProps<Node = EnumValueDefinition>,
    ) -> Result<&mut Self, EditError> {
        collection::update(
            SlotRef::new(self.name.as_str(), "values"),
            &mut self.values,
            name,
            props,
        )?;
        Ok(self)
    }

    /// Update the enum value carrying the props' name if it exists,
    /// otherwise append a new one.
    pub fn upsert_value(
        &mut self,
        props: impl NodeProps<Node = EnumValueDefinition>,
    ) -> &mut Self {
        collection::upsert(&mut self.values, props);
        self
    }

    /// Delete the enum value named `name`.
    pub fn remove_value(&mut self, name: &str) -> Result<&mut Self, EditError> {
        collection::remove(
            SlotRef::new(self.name.as_str(), "values"),
            &mut self.values,
            name,
        )?;
        Ok(self)
    }
}

#[inherent]
impl NamedNode for EnumTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }

    pub fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_node_as_own_props!(EnumTypeDefinition);
impl_directives_api!(EnumTypeDefinition);

/// Partial props for building or updating an [`EnumTypeDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeProps {
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub name: String,
    pub values: Option<Vec<EnumValueDefinition>>,
}
impl EnumTypeProps {
    pub fn new(name: impl Into<String>) -> Self {
        EnumTypeProps {
            description: None,
            directives: None,
            name: name.into(),
            values: None,
        }
    }
}
impl NodeProps for EnumTypeProps {
    type Node = EnumTypeDefinition;

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn build(self) -> EnumTypeDefinition {
        EnumTypeDefinition {
            description: self.description,
            directives: self.directives.unwrap_or_default(),
            name: self.name,
            values: self.values.unwrap_or_default(),
        }
    }

    fn merge_over(self, existing: &EnumTypeDefinition) -> EnumTypeDefinition {
        EnumTypeDefinition {
            description: self.description.or_else(|| existing.description.clone()),
            directives: self
                .directives
                .unwrap_or_else(|| existing.directives.clone()),
            name: self.name,
            values: self.values.unwrap_or_else(|| existing.values.clone()),
        }
    }
}
