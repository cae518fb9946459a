use crate::NodeKind;
use thiserror::Error;

/// The error type produced by every fallible edit operation in this
/// crate.
///
/// All variants indicate a logical precondition violation discovered
/// synchronously at the point of the call; there is no transient
/// failure mode and nothing is retried internally. A failed operation
/// leaves the tree exactly as it was.
///
/// [`NotFound`](EditError::NotFound) and
/// [`Conflict`](EditError::Conflict) are ordinary, recoverable
/// outcomes that callers may branch on.
/// [`InvalidKind`](EditError::InvalidKind) indicates misuse of the
/// API (a node of the wrong kind presented at a kind-checked
/// position) and should be treated as non-recoverable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EditError {
    #[error(
        "A node named `{name}` already exists in the `{slot}` of \
        `{parent}`"
    )]
    Conflict {
        name: String,
        parent: String,
        slot: &'static str,
    },

    #[error(
        "Kind mismatch for {context}: expected a `{expected}` node, \
        found `{actual}`"
    )]
    InvalidKind {
        actual: NodeKind,
        context: &'static str,
        expected: NodeKind,
    },

    #[error("No node named `{name}` found in the `{slot}` of `{parent}`")]
    NotFound {
        name: String,
        parent: String,
        slot: &'static str,
    },
}
