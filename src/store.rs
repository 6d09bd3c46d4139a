//! Node Store (C2, spec §4.2).
//!
//! An arena of nodes plus a unique table that hash-conses `(variable, low,
//! high)` triples. The store guarantees invariants (1) terminal-uniqueness,
//! (3) non-redundancy and (4) cross-node uniqueness *by construction*, as
//! long as every caller creates internal nodes exclusively through
//! [`NodeStore::make`]. Invariant (2), ordering, is the caller's
//! responsibility (the Builder and Reducer both respect it by walking
//! variables in order).
//!
//! The unique table is split per variable, mirroring OBDDimal's own
//! `level2nodes: Vec<HashSet<DDNode>>` — since a node's variable already
//! pins it to one level, partitioning the table this way keeps lookups
//! small and makes the Reducer's "process one level at a time" pass a
//! matter of indexing rather than filtering.

use crate::hash::HashMap;
use crate::node::{Node, NodeId, Triple, VarId, ONE, ZERO};

#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
    unique: Vec<HashMap<Triple, NodeId>>,
}

impl NodeStore {
    pub fn new() -> Self {
        let nodes = vec![Node::Terminal(false), Node::Terminal(true)];
        NodeStore {
            nodes,
            unique: Vec::new(),
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

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.node(id).is_terminal()
    }

    /// Number of nodes allocated in the arena, including the two terminals.
    /// This is an upper bound on reachable size, not the size of any
    /// particular BDD — use [`crate::query::count_nodes`] for that.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    fn ensure_level(&mut self, var: VarId) {
        while self.unique.len() <= var.0 {
            self.unique.push(HashMap::default());
        }
    }

    /// Create (or reuse) the internal node `(var, low, high)`.
    ///
    /// If `low == high` the node would be redundant; per spec §4.2 this is
    /// never allocated — `low` is returned directly. Otherwise the unique
    /// table is consulted: a hit returns the existing handle, a miss
    /// allocates and interns a new one.
    pub fn make(&mut self, var: VarId, low: NodeId, high: NodeId) -> NodeId {
        if low == high {
            log::trace!("make({var:?}, {low:?}, {high:?}): redundant, returning low");
            return low;
        }

        self.ensure_level(var);
        let key = Triple { var, low, high };
        if let Some(&existing) = self.unique[var.0].get(&key) {
            log::trace!("make({var:?}, {low:?}, {high:?}): unique-table hit -> {existing:?}");
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Internal { var, low, high });
        self.unique[var.0].insert(key, id);
        log::trace!("make({var:?}, {low:?}, {high:?}): allocated {id:?}");
        id
    }

    /// Total number of distinct internal nodes interned for `var`, for
    /// diagnostics and tests.
    pub fn level_size(&self, var: VarId) -> usize {
        self.unique.get(var.0).map(|m| m.len()).unwrap_or(0)
    }
}
