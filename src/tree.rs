//! The plain decision-tree arena the Builder writes into (spec §4.3).
//!
//! This is deliberately *not* the canonical [`crate::store::NodeStore`]:
//! the Builder's recursive Shannon expansion walks every one of the `2^n`
//! leaves of the decision tree independently, and if every one of those
//! calls consulted a single global unique table, the result would already
//! be fully reduced — leaving nothing for the Reducer (C4) to do, and no
//! way to report the `nodes_removed`/`nodes_merged` statistics spec §6
//! asks `reduce` to return.
//!
//! So the arena here only applies the *local* redundancy rule (never
//! allocate a node whose low and high children are identical — spec §4.2's
//! `make`, minus the cross-call interning) and otherwise allocates a fresh
//! node per call. Terminals are still the two shared handles. The result
//! satisfies invariants (1) and (3) but generally not (4): the same
//! `(var, low, high)` triple can and does appear at multiple arena slots,
//! because the same sub-formula gets rebuilt along independent recursion
//! paths. [`crate::reduce::reduce`] turns this into a canonical BDD.

use crate::node::{Node, NodeId, VarId, ONE, ZERO};

#[derive(Debug, Default)]
pub struct TreeArena {
    nodes: Vec<Node>,
}

impl TreeArena {
    pub fn new() -> Self {
        TreeArena {
            nodes: vec![Node::Terminal(false), Node::Terminal(true)],
        }
    }

    pub fn terminal(&self, value: bool) -> NodeId {
        if value {
            ONE
        } else {
            ZERO
        }
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Local redundancy rule only — no unique table, see module docs.
    pub fn make(&mut self, var: VarId, low: NodeId, high: NodeId) -> NodeId {
        if low == high {
            return low;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Internal { var, low, high });
        id
    }
}
