//! Facade mixin macros.
//!
//! The collection engine in [`crate::collection`] is written once;
//! these macros stamp out the thin per-kind facade over it. The only
//! per-kind inputs are the element type and (implicitly) the slot
//! field the methods operate on, supplied at each invocation site.

/// Implements [`crate::NodeProps`] for a node type acting as its own
/// props: building is the identity and merging is full replacement.
macro_rules! impl_node_as_own_props {
    ($node:ty) => {
        impl crate::NodeProps for $node {
            type Node = $node;

            fn name(&self) -> &str {
                self.name.as_str()
            }

            fn build(self) -> $node {
                self
            }

            fn merge_over(self, _existing: &$node) -> $node {
                self
            }
        }
    };
}

/// Implements the arguments facade over a node's `arguments` slot.
macro_rules! impl_arguments_api {
    ($node:ty, $element:ty) => {
        impl $node {
            /// Find the argument named `name`.
            pub fn argument(&self, name: &str) -> Result<&$element, crate::EditError> {
                crate::collection::get(
                    crate::collection::SlotRef::new(self.name.as_str(), "arguments"),
                    &self.arguments,
                    name,
                )
            }

            /// Find the argument named `name`, mutably.
            pub fn argument_mut(
                &mut self,
                name: &str,
            ) -> Result<&mut $element, crate::EditError> {
                crate::collection::get_mut(
                    crate::collection::SlotRef::new(self.name.as_str(), "arguments"),
                    &mut self.arguments,
                    name,
                )
            }

            /// The names of all arguments, in collection order.
            pub fn argument_names(&self) -> Vec<&str> {
                crate::collection::names(&self.arguments)
            }

            /// Indicates whether an argument named `name` exists.
            pub fn has_argument(&self, name: &str) -> bool {
                crate::collection::has(&self.arguments, name)
            }

            /// Build an argument from `props` and append it.
            pub fn create_argument(
                &mut self,
                props: impl crate::NodeProps<Node = $element>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::create(
                    crate::collection::SlotRef::new(self.name.as_str(), "arguments"),
                    &mut self.arguments,
                    props,
                )?;
                Ok(self)
            }

            /// Replace the argument named `name` in place with `props`
            /// merged over it.
            pub fn update_argument(
                &mut self,
                name: &str,
                props: impl crate::NodeProps<Node = $element>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::update(
                    crate::collection::SlotRef::new(self.name.as_str(), "arguments"),
                    &mut self.arguments,
                    name,
                    props,
                )?;
                Ok(self)
            }

            /// Update the argument carrying the props' name if it
            /// exists, otherwise append a new one.
            pub fn upsert_argument(
                &mut self,
                props: impl crate::NodeProps<Node = $element>,
            ) -> &mut Self {
                crate::collection::upsert(&mut self.arguments, props);
                self
            }

            /// Delete the argument named `name`.
            pub fn remove_argument(
                &mut self,
                name: &str,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::remove(
                    crate::collection::SlotRef::new(self.name.as_str(), "arguments"),
                    &mut self.arguments,
                    name,
                )?;
                Ok(self)
            }
        }
    };
}

/// Implements the fields facade over a node's `fields` slot.
macro_rules! impl_fields_api {
    ($node:ty, $element:ty) => {
        impl $node {
            /// Find the field named `name`.
            pub fn field(&self, name: &str) -> Result<&$element, crate::EditError> {
                crate::collection::get(
                    crate::collection::SlotRef::new(self.name.as_str(), "fields"),
                    &self.fields,
                    name,
                )
            }

            /// Find the field named `name`, mutably.
            pub fn field_mut(
                &mut self,
                name: &str,
            ) -> Result<&mut $element, crate::EditError> {
                crate::collection::get_mut(
                    crate::collection::SlotRef::new(self.name.as_str(), "fields"),
                    &mut self.fields,
                    name,
                )
            }

            /// The names of all fields, in collection order.
            pub fn field_names(&self) -> Vec<&str> {
                crate::collection::names(&self.fields)
            }

            /// Indicates whether a field named `name` exists.
            pub fn has_field(&self, name: &str) -> bool {
                crate::collection::has(&self.fields, name)
            }

            /// Build a field from `props` and append it.
            pub fn create_field(
                &mut self,
                props: impl crate::NodeProps<Node = $element>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::create(
                    crate::collection::SlotRef::new(self.name.as_str(), "fields"),
                    &mut self.fields,
                    props,
                )?;
                Ok(self)
            }

            /// Replace the field named `name` in place with `props`
            /// merged over it.
            pub fn update_field(
                &mut self,
                name: &str,
                props: impl crate::NodeProps<Node = $element>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::update(
                    crate::collection::SlotRef::new(self.name.as_str(), "fields"),
                    &mut self.fields,
                    name,
                    props,
                )?;
                Ok(self)
            }

            /// Update the field carrying the props' name if it
            /// exists, otherwise append a new one.
            pub fn upsert_field(
                &mut self,
                props: impl crate::NodeProps<Node = $element>,
            ) -> &mut Self {
                crate::collection::upsert(&mut self.fields, props);
                self
            }

            /// Delete the field named `name`.
            pub fn remove_field(
                &mut self,
                name: &str,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::remove(
                    crate::collection::SlotRef::new(self.name.as_str(), "fields"),
                    &mut self.fields,
                    name,
                )?;
                Ok(self)
            }
        }
    };
}

/// Implements the directives facade over a node's `directives` slot.
macro_rules! impl_directives_api {
    ($node:ty) => {
        impl $node {
            /// Find the directive annotation named `name`.
            pub fn directive(
                &self,
                name: &str,
            ) -> Result<&crate::node::DirectiveAnnotation, crate::EditError> {
                crate::collection::get(
                    crate::collection::SlotRef::new(self.name.as_str(), "directives"),
                    &self.directives,
                    name,
                )
            }

            /// Find the directive annotation named `name`, mutably.
            pub fn directive_mut(
                &mut self,
                name: &str,
            ) -> Result<&mut crate::node::DirectiveAnnotation, crate::EditError> {
                crate::collection::get_mut(
                    crate::collection::SlotRef::new(self.name.as_str(), "directives"),
                    &mut self.directives,
                    name,
                )
            }

            /// The names of all directive annotations, in collection
            /// order.
            pub fn directive_names(&self) -> Vec<&str> {
                crate::collection::names(&self.directives)
            }

            /// Indicates whether a directive annotation named `name`
            /// exists.
            pub fn has_directive(&self, name: &str) -> bool {
                crate::collection::has(&self.directives, name)
            }

            /// Build a directive annotation from `props` and append
            /// it.
            pub fn create_directive(
                &mut self,
                props: impl crate::NodeProps<Node = crate::node::DirectiveAnnotation>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::create(
                    crate::collection::SlotRef::new(self.name.as_str(), "directives"),
                    &mut self.directives,
                    props,
                )?;
                Ok(self)
            }

            /// Replace the directive annotation named `name` in place
            /// with `props` merged over it.
            pub fn update_directive(
                &mut self,
                name: &str,
                props: impl crate::NodeProps<Node = crate::node::DirectiveAnnotation>,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::update(
                    crate::collection::SlotRef::new(self.name.as_str(), "directives"),
                    &mut self.directives,
                    name,
                    props,
                )?;
                Ok(self)
            }

            /// Update the directive annotation carrying the props'
            /// name if it exists, otherwise append a new one.
            pub fn upsert_directive(
                &mut self,
                props: impl crate::NodeProps<Node = crate::node::DirectiveAnnotation>,
            ) -> &mut Self {
                crate::collection::upsert(&mut self.directives, props);
                self
            }

            /// Delete the directive annotation named `name`.
            pub fn remove_directive(
                &mut self,
                name: &str,
            ) -> Result<&mut Self, crate::EditError> {
                crate::collection::remove(
                    crate::collection::SlotRef::new(self.name.as_str(), "directives"),
                    &mut self.directives,
                    name,
                )?;
                Ok(self)
            }
        }
    };
}

pub(crate) use impl_arguments_api;
pub(crate) use impl_directives_api;
pub(crate) use impl_fields_api;
pub(crate) use impl_node_as_own_props;
