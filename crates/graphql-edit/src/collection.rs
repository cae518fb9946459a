//! The named-child collection engine.
//!
//! Generic CRUD over an ordered collection of uniquely-named child
//! nodes held in one slot of a parent node (e.g. the `arguments` of a
//! directive annotation, or the `fields` of an object type). The
//! engine is written once against the minimal structural contract of
//! [`NamedNode`] + [`NodeProps`]; each per-kind facade supplies only
//! its slot and its element type.
//!
//! Invariants maintained:
//!
//! - no two siblings in a collection share an identifier;
//! - collection order is insertion order, preserved across
//!   [`update`]/[`upsert`] and never reordered by lookups;
//! - operations are atomic — a failed call leaves the collection
//!   untouched.

use crate::EditError;
use crate::NamedNode;
use crate::NodeProps;

/// Diagnostic handle naming one child-collection slot of one parent
/// node.
///
/// Carried by every engine call and threaded into errors; it never
/// affects control flow. `parent` is conventionally the owning node's
/// own identifier.
#[derive(Clone, Copy, Debug)]
pub struct SlotRef<'a> {
    pub parent: &'a str,
    pub slot: &'static str,
}
impl<'a> SlotRef<'a> {
    pub fn new(parent: &'a str, slot: &'static str) -> Self {
        SlotRef { parent, slot }
    }

    fn conflict(&self, name: &str) -> EditError {
        EditError::Conflict {
            name: name.to_string(),
            parent: self.parent.to_string(),
            slot: self.slot,
        }
    }

    fn not_found(&self, name: &str) -> EditError {
        EditError::NotFound {
            name: name.to_string(),
            parent: self.parent.to_string(),
            slot: self.slot,
        }
    }
}

/// Find the unique child named `name`.
pub fn get<'items, TNode: NamedNode>(
    slot: SlotRef<'_>,
    items: &'items [TNode],
    name: &str,
) -> Result<&'items TNode, EditError> {
    items
        .iter()
        .find(|item| item.node_name() == name)
        .ok_or_else(|| slot.not_found(name))
}

/// Find the unique child named `name`, mutably.
pub fn get_mut<'items, TNode: NamedNode>(
    slot: SlotRef<'_>,
    items: &'items mut [TNode],
    name: &str,
) -> Result<&'items mut TNode, EditError> {
    items
        .iter_mut()
        .find(|item| item.node_name() == name)
        .ok_or_else(|| slot.not_found(name))
}

/// Indicates whether a child named `name` exists. Never fails.
pub fn has<TNode: NamedNode>(items: &[TNode], name: &str) -> bool {
    items.iter().any(|item| item.node_name() == name)
}

/// The identifiers of all children, in collection order.
pub fn names<TNode: NamedNode>(items: &[TNode]) -> Vec<&str> {
    items.iter().map(|item| item.node_name()).collect()
}

/// Build a new child from `props` and append it to the collection.
///
/// Fails with [`EditError::Conflict`] (mutating nothing) if a child
/// with the props' identifier already exists.
pub fn create<TProps: NodeProps>(
    slot: SlotRef<'_>,
    items: &mut Vec<TProps::Node>,
    props: TProps,
) -> Result<(), EditError> {
    if has(items, props.name()) {
        return Err(slot.conflict(props.name()));
    }
    items.push(props.build());
    Ok(())
}

/// Replace the child named `name`, in place at its current position,
/// with `props` merged over it.
///
/// Fails with [`EditError::NotFound`] if no such child exists. If the
/// merged node carries a *different* identifier than `name`, the new
/// identifier must still be unique among the remaining siblings;
/// otherwise the call fails with [`EditError::Conflict`] and mutates
/// nothing.
pub fn update<TProps: NodeProps>(
    slot: SlotRef<'_>,
    items: &mut [TProps::Node],
    name: &str,
    props: TProps,
) -> Result<(), EditError> {
    let index = items
        .iter()
        .position(|item| item.node_name() == name)
        .ok_or_else(|| slot.not_found(name))?;
    let merged = props.merge_over(&items[index]);
    if merged.node_name() != name {
        let taken = items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.node_name() == merged.node_name());
        if taken {
            return Err(slot.conflict(merged.node_name()));
        }
    }
    items[index] = merged;
    Ok(())
}

/// Update-or-create: if a child with the props' identifier exists,
/// behaves as [`update`] (in place, same position); otherwise behaves
/// as [`create`] (appended at the end).
///
/// The total variant of create/update — it cannot fail on existence
/// grounds, so it reports no error.
pub fn upsert<TProps: NodeProps>(items: &mut Vec<TProps::Node>, props: TProps) {
    let index = items
        .iter()
        .position(|item| item.node_name() == props.name());
    match index {
        Some(index) => {
            let merged = props.merge_over(&items[index]);
            items[index] = merged;
        }
        None => items.push(props.build()),
    }
}

/// Delete the child named `name`, preserving the relative order of
/// the remaining children, and return it.
///
/// Fails with [`EditError::NotFound`] if no such child exists.
pub fn remove<TNode: NamedNode>(
    slot: SlotRef<'_>,
    items: &mut Vec<TNode>,
    name: &str,
) -> Result<TNode, EditError> {
    let index = items
        .iter()
        .position(|item| item.node_name() == name)
        .ok_or_else(|| slot.not_found(name))?;
    Ok(items.remove(index))
}
