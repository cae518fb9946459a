//! Programmatic creation and in-place editing of GraphQL AST nodes.
//!
//! This crate operates on an already-parsed, owned GraphQL AST (see
//! [`node`]) and lets callers read and rewrite named sub-elements of
//! that tree — arguments, fields, directives, type references —
//! without hand-rolling tree-splicing code.
//!
//! Two engines do the interesting work:
//!
//! - The [`collection`] module: get/create/update/upsert/remove
//!   semantics over any ordered collection of uniquely-named child
//!   nodes, written once and reused by every node kind.
//! - The wrapper algebra on [`TypeRef`](node::TypeRef): reading and
//!   rewriting the `List`/`NonNull`/`Named` nesting of a type
//!   reference in place, so that every existing path to the node
//!   observes the rewrite.
//!
//! Everything else is a thin, per-kind facade over those two engines
//! (e.g. [`DirectiveAnnotation::create_argument`](node::DirectiveAnnotation::create_argument)
//! or [`ObjectTypeDefinition::remove_field`](node::ObjectTypeDefinition::remove_field)).
//!
//! Parsing source text, validating a tree against a schema, and
//! printing a tree back to SDL are all out of scope: this crate only
//! mutates an in-memory tree assumed well-formed per the GraphQL
//! grammar.
//!
//! # Example
//!
//! ```rust
//! use graphql_edit::node::Argument;
//! use graphql_edit::node::DirectiveAnnotation;
//! use graphql_edit::node::Value;
//!
//! let mut annot = DirectiveAnnotation::new("paginate");
//! annot
//!     .create_argument(Argument::new("limit", Value::Int(10)))?
//!     .create_argument(Argument::new("offset", Value::Int(0)))?;
//! assert_eq!(annot.argument_names(), vec!["limit", "offset"]);
//!
//! annot.remove_argument("offset")?;
//! assert!(!annot.has_argument("offset"));
//! # Ok::<(), graphql_edit::EditError>(())
//! ```

pub mod collection;
mod edit_error;
mod named_node;
pub mod node;
mod node_kind;
mod node_props;

pub use edit_error::EditError;
pub use named_node::NamedNode;
pub use node_kind::NodeKind;
pub use node_props::NodeProps;

#[cfg(test)]
mod tests;
