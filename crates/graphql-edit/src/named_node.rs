use crate::NodeKind;

/// The structural contract between the collection engine in
/// [`crate::collection`] and the node model.
///
/// Implemented by every node kind that participates in a named child
/// collection (arguments, fields, directives, enum values, object
/// fields). The engine depends on nothing else about a node's shape.
pub trait NamedNode {
    /// The `kind` tag identifying this node's shape.
    fn kind(&self) -> NodeKind;

    /// The identifier distinguishing this node from its siblings
    /// within a named child collection.
    fn node_name(&self) -> &str;
}
