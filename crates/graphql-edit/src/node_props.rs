use crate::NamedNode;

/// The node-factory contract consumed by the collection engine in
/// [`crate::collection`].
///
/// A `NodeProps` value is a property bag from which a complete node
/// of one kind can be built, filling defaults for anything omitted.
/// Every collection-element node type implements `NodeProps` for
/// itself (building is the identity, merging is full replacement), so
/// callers may pass either a complete node or a dedicated `*Props`
/// struct wherever props are accepted.
pub trait NodeProps {
    /// The node kind these props build.
    type Node: NamedNode;

    /// The identifier carried by these props. Determines the name a
    /// created node is registered under and the uniqueness checks run
    /// against its siblings.
    fn name(&self) -> &str;

    /// Build a complete node, applying defaults for every omitted
    /// field.
    fn build(self) -> Self::Node;

    /// Merge these props over an existing node: fields present in the
    /// props override, omitted fields keep the existing node's
    /// values. Used by `update`/`upsert` so a caller can rewrite one
    /// aspect of a node without restating the rest.
    fn merge_over(self, existing: &Self::Node) -> Self::Node;
}
