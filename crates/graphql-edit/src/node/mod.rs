//! The owned, mutable GraphQL node model this crate edits.
//!
//! One type per node kind, all with public fields (they *are* the
//! AST) plus `new(..)` constructors acting as node factories: required
//! fields are parameters, everything else defaults. Each kind that
//! participates in a named child collection implements
//! [`NamedNode`](crate::NamedNode) and carries a thin facade over the
//! engine in [`crate::collection`].
//!
//! Slots are plain `Vec`s; an empty `Vec` plays the role of an absent
//! slot.

mod argument;
mod directive_annotation;
mod enum_type_definition;
mod enum_value_definition;
mod field_definition;
mod input_object_type_definition;
mod input_value_definition;
mod mixins;
mod object_field;
mod object_type_definition;
mod type_ref;
mod value;

pub use argument::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_annotation::DirectiveAnnotationProps;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_definition::EnumTypeProps;
pub use enum_value_definition::EnumValueDefinition;
pub use enum_value_definition::EnumValueProps;
pub use field_definition::FieldDefinition;
pub use field_definition::FieldDefinitionProps;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_object_type_definition::InputObjectTypeProps;
pub use input_value_definition::InputValueDefinition;
pub use input_value_definition::InputValueProps;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_type_definition::ObjectTypeProps;
pub use type_ref::TypeRef;
pub use value::Value;

#[cfg(test)]
mod tests;
