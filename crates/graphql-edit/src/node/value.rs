use crate::EditError;
use crate::NodeKind;
use crate::NodeProps;
use crate::collection;
use crate::collection::SlotRef;
use crate::node::ObjectField;

/// A GraphQL input
/// [value](https://spec.graphql.org/October2021/#sec-Input-Values):
/// the tagged union appearing in argument values, default values, and
/// object fields.
///
/// `Value` is the one kind-erased position in the node model: which
/// operations apply depends on the runtime tag, so the object-field
/// accessors below fail with [`EditError::InvalidKind`] when invoked
/// on a non-object value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(String),
}
impl Value {
    /// The `kind` tag of this value.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Boolean(_) => NodeKind::BooleanValue,
            Self::Enum(_) => NodeKind::EnumValue,
            Self::Float(_) => NodeKind::FloatValue,
            Self::Int(_) => NodeKind::IntValue,
            Self::List(_) => NodeKind::ListValue,
            Self::Null => NodeKind::NullValue,
            Self::Object(_) => NodeKind::ObjectValue,
            Self::String(_) => NodeKind::StringValue,
            Self::Variable(_) => NodeKind::Variable,
        }
    }

    /// Unwrap the string if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Find the object field named `name`.
    pub fn object_field(&self, name: &str) -> Result<&ObjectField, EditError> {
        collection::get(Self::object_slot(), self.object_fields()?, name)
    }

    /// Find the object field named `name`, mutably.
    pub fn object_field_mut(&mut self, name: &str) -> Result<&mut ObjectField, EditError> {
        collection::get_mut(Self::object_slot(), self.object_fields_mut()?, name)
    }

    /// The names of all object fields, in collection order.
    pub fn object_field_names(&self) -> Result<Vec<&str>, EditError> {
        Ok(collection::names(self.object_fields()?))
    }

    /// Indicates whether this is an object value with a field named
    /// `name`. Never fails.
    pub fn has_object_field(&self, name: &str) -> bool {
        matches!(self, Self::Object(fields) if collection::has(fields, name))
    }

    /// Build an object field from `props` and append it.
    pub fn create_object_field(
        &mut self,
        props: impl NodeProps<Node = ObjectField>,
    ) -> Result<&mut Self, EditError> {
        collection::create(Self::object_slot(), self.object_fields_mut()?, props)?;
        Ok(self)
    }

    /// Replace the object field named `name` in place with `props`
    /// merged over it.
    pub fn update_object_field(
        &mut self,
        name: &str,
        props: impl NodeProps<Node = ObjectField>,
    ) -> Result<&mut Self, EditError> {
        collection::update(Self::object_slot(), self.object_fields_mut()?, name, props)?;
        Ok(self)
    }

    /// Update the object field carrying the props' name if it exists,
    /// otherwise append a new one.
    pub fn upsert_object_field(
        &mut self,
        props: impl NodeProps<Node = ObjectField>,
    ) -> Result<&mut Self, EditError> {
        collection::upsert(self.object_fields_mut()?, props);
        Ok(self)
    }

    /// Delete the object field named `name`.
    pub fn remove_object_field(&mut self, name: &str) -> Result<&mut Self, EditError> {
        collection::remove(Self::object_slot(), self.object_fields_mut()?, name)?;
        Ok(self)
    }

    // Object values are anonymous, so the diagnostic parent label is
    // a fixed placeholder.
    fn object_slot() -> SlotRef<'static> {
        SlotRef::new("object value", "fields")
    }

    fn object_fields(&self) -> Result<&Vec<ObjectField>, EditError> {
        match self {
            Self::Object(fields) => Ok(fields),
            other => Err(EditError::InvalidKind {
                actual: other.kind(),
                context: "object-field access",
                expected: NodeKind::ObjectValue,
            }),
        }
    }

    fn object_fields_mut(&mut self) -> Result<&mut Vec<ObjectField>, EditError> {
        match self {
            Self::Object(fields) => Ok(fields),
            other => Err(EditError::InvalidKind {
                actual: other.kind(),
                context: "object-field access",
                expected: NodeKind::ObjectValue,
            }),
        }
    }
}
