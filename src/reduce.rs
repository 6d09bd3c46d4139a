//! Reducer (C4, spec §4.4) — "Algorithm 5.3".
//!
//! Bottom-up, level by level from the deepest variable up to the
//! shallowest: terminals get canonical labels first, then each level's
//! nodes are either collapsed (redundant, `low == high`) or merged with a
//! previously-seen isomorphic node, or kept as a fresh canonical node.
//! Because the target of every redirection is the canonical
//! [`NodeStore`](crate::store::NodeStore), isomorphism merging falls out of
//! the store's own unique table (§4.2) — we only need to track, per old
//! node, which new node it was relabeled to.

use crate::bdd::Bdd;
use crate::hash::HashMap;
use crate::node::{Node, NodeId, ONE, ZERO};
use crate::store::NodeStore;
use crate::unreduced::UnreducedBdd;

/// Counts returned by a reduction pass (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceStats {
    /// Internal nodes collapsed because `low == high`.
    pub nodes_removed: usize,
    /// Internal nodes unified with an already-built isomorphic node.
    pub nodes_merged: usize,
    /// Size of the arena handed to `reduce` (including terminals).
    pub nodes_before: usize,
    /// Size of the canonical store after reduction (including terminals).
    pub nodes_after: usize,
}

/// Reduce an unreduced BDD to its canonical form, consuming it.
pub fn reduce(input: UnreducedBdd) -> (Bdd, ReduceStats) {
    let UnreducedBdd { arena, root, order } = input;
    let num_vars = order.len();
    let nodes_before = arena.len();

    // Bucket every internal node by the level (= VarId) it belongs to, deepest
    // level last so we can walk the buckets in reverse.
    let mut by_level: Vec<Vec<NodeId>> = vec![Vec::new(); num_vars];
    for i in 0..arena.len() {
        let id = NodeId(i);
        if let Some((var, _, _)) = arena.node(id).as_internal() {
            by_level[var.0].push(id);
        }
    }

    let mut label: HashMap<NodeId, NodeId> = HashMap::default();
    label.insert(ZERO, ZERO);
    label.insert(ONE, ONE);

    let mut store = NodeStore::new();
    let mut nodes_removed = 0usize;
    let mut nodes_merged = 0usize;

    for level in (0..num_vars).rev() {
        log::debug!(
            "reduce: level {level} has {} node(s)",
            by_level[level].len()
        );
        for &old_id in &by_level[level] {
            let (var, low, high) = match arena.node(old_id) {
                Node::Internal { var, low, high } => (var, low, high),
                Node::Terminal(_) => unreachable!("terminals are never bucketed by level"),
            };
            let new_low = *label
                .get(&low)
                .expect("low child must have been labeled at a deeper level");
            let new_high = *label
                .get(&high)
                .expect("high child must have been labeled at a deeper level");

            if new_low == new_high {
                nodes_removed += 1;
                label.insert(old_id, new_low);
                continue;
            }

            let before = store.len();
            let new_id = store.make(var, new_low, new_high);
            if store.len() == before {
                nodes_merged += 1;
            }
            label.insert(old_id, new_id);
        }
    }

    let new_root = *label
        .get(&root)
        .expect("root must have received a label by the end of the pass");

    let nodes_after = store.len();
    let stats = ReduceStats {
        nodes_removed,
        nodes_merged,
        nodes_before,
        nodes_after,
    };

    log::debug!(
        "reduce: {nodes_before} -> {nodes_after} nodes ({nodes_removed} removed, {nodes_merged} merged)"
    );

    (Bdd::from_parts(store, new_root, order), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Formula;
    use crate::builder::build;
    use crate::order::VariableOrder;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn reduce_single_variable_is_already_minimal() {
        init();
        let f = Formula::var("p");
        let unreduced = build(&f, None).unwrap();
        let (bdd, stats) = reduce(unreduced);
        assert_eq!(stats.nodes_removed, 0);
        assert_eq!(stats.nodes_merged, 0);
        assert_eq!(crate::query::count_nodes(&bdd), 3);
    }

    #[test]
    fn reduce_collapses_p_or_q_and_r_to_five_nodes() {
        init();
        // p \/ (q /\ r), order [p, q, r]
        let f = Formula::or(
            Formula::var("p"),
            Formula::and(Formula::var("q"), Formula::var("r")),
        );
        let order = VariableOrder::new(vec!["p".into(), "q".into(), "r".into()]);
        let unreduced = build(&f, Some(order)).unwrap();
        let (bdd, _stats) = reduce(unreduced);
        assert_eq!(crate::query::count_nodes(&bdd), 5);
        assert!(crate::query::is_satisfiable(&bdd));
        assert!(!crate::query::is_valid(&bdd));
    }

    #[test]
    fn reduce_tautology_collapses_to_one_terminal() {
        init();
        // (p -> q) <-> (~p \/ q) is a tautology.
        let p = Formula::var("p");
        let q = Formula::var("q");
        let f = Formula::iff(
            Formula::implies(p.clone(), q.clone()),
            Formula::or(Formula::not(p), q),
        );
        let unreduced = build(&f, None).unwrap();
        let (bdd, _) = reduce(unreduced);
        assert!(crate::query::is_valid(&bdd));
        assert_eq!(crate::query::count_nodes(&bdd), 1);
    }

    #[test]
    fn reduce_order_sensitivity() {
        init();
        // (x0/\y0) \/ (x1/\y1)
        let x0 = Formula::var("x0");
        let y0 = Formula::var("y0");
        let x1 = Formula::var("x1");
        let y1 = Formula::var("y1");
        let f = Formula::or(
            Formula::and(x0.clone(), y0.clone()),
            Formula::and(x1.clone(), y1.clone()),
        );

        let good_order = VariableOrder::new(vec![
            "x0".into(),
            "y0".into(),
            "x1".into(),
            "y1".into(),
        ]);
        let (good_bdd, _) = reduce(build(&f, Some(good_order)).unwrap());
        assert!(crate::query::count_nodes(&good_bdd) <= 7);

        let bad_order = VariableOrder::new(vec![
            "x0".into(),
            "x1".into(),
            "y0".into(),
            "y1".into(),
        ]);
        let (bad_bdd, _) = reduce(build(&f, Some(bad_order)).unwrap());
        assert!(crate::query::count_nodes(&bad_bdd) > crate::query::count_nodes(&good_bdd));
    }
}
