//! Node handles and the node data model (spec §3).
//!
//! Two kinds of node exist: terminals, carrying a Boolean value, and
//! internal nodes, carrying a variable and two children. Nodes are
//! identified by stable, store-local handles; handles compare by identity
//! and are meaningless outside the store that produced them.

use std::hash::{Hash, Hasher};

/// Handle to a node within a [`crate::store::NodeStore`] (or a
/// [`crate::tree::TreeArena`]). Valid only against the store that produced
/// it — see spec §3 "Lifecycles".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Reserved handle for the `⊥` terminal.
pub const ZERO: NodeId = NodeId(0);
/// Reserved handle for the `⊤` terminal.
pub const ONE: NodeId = NodeId(1);

/// Position of a variable within a [`crate::order::VariableOrder`].
///
/// `VarId` is an index into the order, not a user-facing name; callers deal
/// in [`crate::ast::Variable`] names and the order translates between the
/// two.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarId(pub usize);

/// A node as stored in an arena: either terminal, or internal and carrying
/// `(variable, low, high)`.
#[derive(Debug, Copy, Clone)]
pub enum Node {
    Terminal(bool),
    Internal {
        var: VarId,
        low: NodeId,
        high: NodeId,
    },
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }

    pub fn as_internal(&self) -> Option<(VarId, NodeId, NodeId)> {
        match *self {
            Node::Internal { var, low, high } => Some((var, low, high)),
            Node::Terminal(_) => None,
        }
    }
}

/// The `(var, low, high)` triple used as the unique-table key. Two internal
/// nodes that hash-cons to the same key are the same node (spec §3,
/// invariant 4).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Triple {
    pub var: VarId,
    pub low: NodeId,
    pub high: NodeId,
}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash by the identity of the child handles, not by structural
        // recursion into their subgraphs (spec §4.2 "Hashing").
        self.var.hash(state);
        self.low.hash(state);
        self.high.hash(state);
    }
}
