//! Query surface (C6, spec §4.6) over canonical [`Bdd`]s, plus the
//! model-counting and witness-finding operations that complete it.

use crate::ast::{Interpretation, Variable};
use crate::bdd::Bdd;
use crate::error::BddError;
use crate::hash::{HashMap, HashSet};
use crate::node::{Node, NodeId};

/// Descend from the root, taking `high` when the interpretation assigns
/// `true` to the node's variable and `low` otherwise; return the terminal's
/// value (spec §4.6).
pub fn evaluate(bdd: &Bdd, interp: &Interpretation) -> Result<bool, BddError> {
    let mut cur = bdd.root();
    loop {
        match bdd.node(cur) {
            Node::Terminal(b) => return Ok(b),
            Node::Internal { var, low, high } => {
                let name = bdd.order().variable_at(var).clone();
                let value = interp.require(&name)?;
                cur = if value { high } else { low };
            }
        }
    }
}

/// For a *reduced* BDD this is `root != ⊥` (spec §4.6).
pub fn is_satisfiable(bdd: &Bdd) -> bool {
    bdd.root() != crate::node::ZERO
}

/// For a *reduced* BDD this is `root == ⊤` (spec §4.6).
pub fn is_valid(bdd: &Bdd) -> bool {
    bdd.root() == crate::node::ONE
}

/// Reduced BDDs in the same store under the same order are equivalent iff
/// their roots are the same handle. Cross-store/cross-order equivalence is
/// *not* attempted here — spec §9 "Equivalence cross-store" is explicit
/// that rebuilding into a common store is a precondition the caller
/// arranges (see [`Bdd::rebuild_into`]), not an implicit fallback.
pub fn equivalent(a: &Bdd, b: &Bdd) -> Result<bool, BddError> {
    if !a.same_store(b) {
        return Err(BddError::StoreMismatch);
    }
    if *a.order() != *b.order() {
        return Err(BddError::OrderMismatch);
    }
    Ok(a.root() == b.root())
}

/// Size of the subgraph reachable from the root, counting terminals if
/// reached (spec §4.6).
pub fn count_nodes(bdd: &Bdd) -> usize {
    let mut seen = HashSet::default();
    let mut stack = vec![bdd.root()];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if let Some((_, low, high)) = bdd.node(id).as_internal() {
            stack.push(low);
            stack.push(high);
        }
    }
    seen.len()
}

/// Direct terminal-flipping traversal with memoization (spec §4.5 "Unary
/// NOT"), rather than routing through `apply(XOR, f, ⊤)`.
pub fn logical_not(bdd: &Bdd) -> Bdd {
    let mut memo: HashMap<NodeId, NodeId> = HashMap::default();
    let new_root = not_rec(bdd, bdd.root(), &mut memo);
    bdd.with_shared(new_root)
}

fn not_rec(bdd: &Bdd, id: NodeId, memo: &mut HashMap<NodeId, NodeId>) -> NodeId {
    if let Some(&done) = memo.get(&id) {
        return done;
    }
    let result = match bdd.node(id) {
        Node::Terminal(b) => bdd.store.borrow().terminal(!b),
        Node::Internal { var, low, high } => {
            let new_low = not_rec(bdd, low, memo);
            let new_high = not_rec(bdd, high, memo);
            bdd.store.borrow_mut().make(var, new_low, new_high)
        }
    };
    memo.insert(id, result);
    result
}

/// One satisfying interpretation, if any: a single DFS to a `⊤` leaf,
/// recording the branch taken at each internal node visited.
pub fn any_satisfying_assignment(bdd: &Bdd) -> Option<Interpretation> {
    fn dfs(bdd: &Bdd, id: NodeId, path: &mut Vec<(Variable, bool)>) -> bool {
        match bdd.node(id) {
            Node::Terminal(true) => true,
            Node::Terminal(false) => false,
            Node::Internal { var, low, high } => {
                let name = bdd.order().variable_at(var).clone();
                path.push((name.clone(), false));
                if dfs(bdd, low, path) {
                    return true;
                }
                path.pop();
                path.push((name, true));
                if dfs(bdd, high, path) {
                    return true;
                }
                path.pop();
                false
            }
        }
    }

    let mut path = Vec::new();
    if dfs(bdd, bdd.root(), &mut path) {
        Some(path.into_iter().collect())
    } else {
        None
    }
}

/// Number of satisfying assignments over `total_vars` variables: the
/// standard node-weighted model count. A variable
/// skipped between a node and one of its children (because the child's
/// level lies further down the order, or the child is a terminal) is free
/// along that branch and doubles the count once per skipped level.
pub fn count_satisfying_assignments(bdd: &Bdd, total_vars: usize) -> u128 {
    debug_assert!(
        total_vars >= bdd.order().len(),
        "total_vars must cover every variable this BDD can branch on"
    );

    fn level_of(bdd: &Bdd, id: NodeId, total_vars: usize) -> usize {
        match bdd.node(id) {
            Node::Terminal(_) => total_vars,
            Node::Internal { var, .. } => var.0,
        }
    }

    fn count(bdd: &Bdd, id: NodeId, total_vars: usize, memo: &mut HashMap<NodeId, u128>) -> u128 {
        match bdd.node(id) {
            Node::Terminal(false) => 0,
            Node::Terminal(true) => 1,
            Node::Internal { low, high, .. } => {
                if let Some(&cached) = memo.get(&id) {
                    return cached;
                }
                let my_level = level_of(bdd, id, total_vars);
                let low_gap = level_of(bdd, low, total_vars) - my_level - 1;
                let high_gap = level_of(bdd, high, total_vars) - my_level - 1;
                let total = count(bdd, low, total_vars, memo) * (1u128 << low_gap)
                    + count(bdd, high, total_vars, memo) * (1u128 << high_gap);
                memo.insert(id, total);
                total
            }
        }
    }

    let mut memo = HashMap::default();
    let root_gap = level_of(bdd, bdd.root(), total_vars);
    count(bdd, bdd.root(), total_vars, &mut memo) * (1u128 << root_gap)
}
