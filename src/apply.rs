//! Apply (C5, spec §4.5): the generic binary combinator, driven by Shannon
//! expansion with a memoization cache local to one top-level call.
//!
//! The recursion is written as an explicit worklist rather than direct
//! Rust recursion (spec §5 "Recursion depth", §9 "Recursion to iteration"):
//! a pair `(f, g)` whose children are not yet cached gets its children
//! pushed on top of it and is revisited once they are ready, mirroring
//! OBDDimal's own iterative `apply` over its ITE cache.

use crate::bdd::Bdd;
use crate::error::BddError;
use crate::hash::HashMap;
use crate::node::{Node, NodeId, VarId};

/// Binary Boolean operators Apply understands (spec §4.5).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
    Nand,
    Nor,
}

impl BoolOp {
    fn eval(self, a: bool, b: bool) -> bool {
        match self {
            BoolOp::And => a && b,
            BoolOp::Or => a || b,
            BoolOp::Xor => a ^ b,
            BoolOp::Implies => !a || b,
            BoolOp::Iff => a == b,
            BoolOp::Nand => !(a && b),
            BoolOp::Nor => !(a || b),
        }
    }

    /// Parse an operator tag by name — used by callers that look operators
    /// up dynamically (e.g. from a surface-syntax operator glyph) rather
    /// than selecting a `BoolOp` variant at compile time.
    pub fn from_tag(tag: &str) -> Result<Self, BddError> {
        match tag {
            "and" | "AND" => Ok(BoolOp::And),
            "or" | "OR" => Ok(BoolOp::Or),
            "xor" | "XOR" => Ok(BoolOp::Xor),
            "implies" | "IMPLIES" => Ok(BoolOp::Implies),
            "iff" | "IFF" => Ok(BoolOp::Iff),
            "nand" | "NAND" => Ok(BoolOp::Nand),
            "nor" | "NOR" => Ok(BoolOp::Nor),
            other => Err(BddError::InvalidOperator(other.to_string())),
        }
    }
}

/// `apply(op, a, b)`: combine two BDDs under `op`. Both must share a store
/// (checked by identity) and a variable order (checked structurally) — spec
/// §4.5 (i), §7 `StoreMismatch`/`OrderMismatch`.
pub fn apply(op: BoolOp, a: &Bdd, b: &Bdd) -> Result<Bdd, BddError> {
    if !a.same_store(b) {
        return Err(BddError::StoreMismatch);
    }
    if *a.order() != *b.order() {
        return Err(BddError::OrderMismatch);
    }

    let mut cache: HashMap<(BoolOp, NodeId, NodeId), NodeId> = HashMap::default();
    let result = apply_worklist(op, a.root, b.root, a, &mut cache);
    log::debug!(
        "apply({op:?}): {} cache entries for this call",
        cache.len()
    );
    Ok(a.with_shared(result))
}

fn cofactor(node: Node, top: VarId, id: NodeId) -> (NodeId, NodeId) {
    match node {
        Node::Internal { var, low, high } if var == top => (low, high),
        _ => (id, id),
    }
}

fn apply_worklist(
    op: BoolOp,
    f0: NodeId,
    g0: NodeId,
    bdd: &Bdd,
    cache: &mut HashMap<(BoolOp, NodeId, NodeId), NodeId>,
) -> NodeId {
    let mut stack = vec![(f0, g0)];

    while let Some(&(f, g)) = stack.last() {
        if cache.contains_key(&(op, f, g)) {
            stack.pop();
            continue;
        }

        let node_f = bdd.node(f);
        let node_g = bdd.node(g);

        if let (Node::Terminal(bf), Node::Terminal(bg)) = (node_f, node_g) {
            let value = op.eval(bf, bg);
            let result = bdd.store.borrow().terminal(value);
            log::trace!("apply({op:?}): both-terminal {f:?},{g:?} -> {result:?}");
            cache.insert((op, f, g), result);
            stack.pop();
            continue;
        }

        let var_f = node_f.as_internal().map(|(v, _, _)| v);
        let var_g = node_g.as_internal().map(|(v, _, _)| v);
        let top = match (var_f, var_g) {
            (Some(vf), Some(vg)) => bdd.order().earliest(vf, vg),
            (Some(vf), None) => vf,
            (None, Some(vg)) => vg,
            (None, None) => unreachable!("at least one operand is internal here"),
        };

        let (f_lo, f_hi) = cofactor(node_f, top, f);
        let (g_lo, g_hi) = cofactor(node_g, top, g);

        let lo = cache.get(&(op, f_lo, g_lo)).copied();
        let hi = cache.get(&(op, f_hi, g_hi)).copied();

        match (lo, hi) {
            (Some(lo), Some(hi)) => {
                let result = bdd.store.borrow_mut().make(top, lo, hi);
                log::trace!("apply({op:?}): {f:?},{g:?} -> {result:?} (var {top:?})");
                cache.insert((op, f, g), result);
                stack.pop();
            }
            _ => {
                if lo.is_none() {
                    stack.push((f_lo, g_lo));
                }
                if hi.is_none() {
                    stack.push((f_hi, g_hi));
                }
            }
        }
    }

    *cache
        .get(&(op, f0, g0))
        .expect("worklist terminates with (f0, g0) cached")
}
