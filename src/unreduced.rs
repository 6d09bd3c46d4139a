//! The output of the Builder (C3) before reduction: a decision tree that
//! satisfies invariants (1) and (3) but generally not (2)-adjacent sharing
//! or (4) (spec §3, §4.3).

use crate::ast::Interpretation;
use crate::error::BddError;
use crate::node::{Node, NodeId};
use crate::order::VariableOrder;
use crate::tree::TreeArena;

#[derive(Debug)]
pub struct UnreducedBdd {
    pub(crate) arena: TreeArena,
    pub(crate) root: NodeId,
    pub(crate) order: VariableOrder,
}

impl UnreducedBdd {
    pub(crate) fn new(arena: TreeArena, root: NodeId, order: VariableOrder) -> Self {
        UnreducedBdd { arena, root, order }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn order(&self) -> &VariableOrder {
        &self.order
    }

    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Evaluate under an interpretation by descending from the root (spec
    /// §4.6). Works identically whether or not the BDD has been reduced.
    pub fn evaluate(&self, interp: &Interpretation) -> Result<bool, BddError> {
        let mut cur = self.root;
        loop {
            match self.arena.node(cur) {
                Node::Terminal(b) => return Ok(b),
                Node::Internal { var, low, high } => {
                    let name = self.order.variable_at(var);
                    let value = interp.require(name)?;
                    cur = if value { high } else { low };
                }
            }
        }
    }

    /// Whether some path from the root reaches `⊤`. Unlike on a reduced
    /// BDD, `root != ⊥` is not sufficient here (an unreduced tree can have
    /// `root` internal yet every path dead-end at `⊥` only if... actually
    /// by construction every internal node has two children, so any
    /// internal root does reach some leaf; this still requires a DFS since
    /// we have not proven canonicity) — spec §4.6: "Before reduction, a DFS
    /// looking for a ⊤-reaching path."
    pub fn is_satisfiable(&self) -> bool {
        let mut stack = vec![self.root];
        let mut seen = crate::hash::HashSet::default();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            match self.arena.node(id) {
                Node::Terminal(true) => return true,
                Node::Terminal(false) => {}
                Node::Internal { low, high, .. } => {
                    stack.push(low);
                    stack.push(high);
                }
            }
        }
        false
    }
}
