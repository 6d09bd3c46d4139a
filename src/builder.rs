//! Builder (C3, spec §4.3): turns a formula AST into an unreduced BDD via
//! full recursive Shannon expansion over the variable order.

use std::collections::HashMap as StdHashMap;

use crate::ast::{Formula, Interpretation, Variable};
use crate::error::BddError;
use crate::node::VarId;
use crate::order::VariableOrder;
use crate::tree::TreeArena;
use crate::unreduced::UnreducedBdd;

/// Build an unreduced BDD for `formula`.
///
/// `order` defaults to the formula's free variables in first-occurrence
/// order when `None` is passed (spec §6). Every variable the formula
/// mentions must appear in the resulting order, or `UnknownVariable` is
/// returned.
pub fn build(formula: &Formula, order: Option<VariableOrder>) -> Result<UnreducedBdd, BddError> {
    let order = match order {
        Some(o) => o,
        None => VariableOrder::new(formula.free_variables()),
    };

    for v in formula.free_variables() {
        order.require_index(&v)?;
    }

    let mut arena = TreeArena::new();
    let mut assignment: StdHashMap<Variable, bool> = StdHashMap::with_capacity(order.len());

    let root = build_rec(formula, &order, VarId(0), &mut assignment, &mut arena)?;

    log::debug!(
        "build: {} variables, {} arena nodes (unreduced)",
        order.len(),
        arena.len()
    );

    Ok(UnreducedBdd::new(arena, root, order))
}

fn build_rec(
    formula: &Formula,
    order: &VariableOrder,
    level: VarId,
    assignment: &mut StdHashMap<Variable, bool>,
    arena: &mut TreeArena,
) -> Result<crate::node::NodeId, BddError> {
    if level.0 >= order.len() {
        let interp: Interpretation = assignment
            .iter()
            .map(|(v, b)| (v.clone(), *b))
            .collect();
        let value = formula.eval(&interp)?;
        return Ok(arena.terminal(value));
    }

    let var = order.variable_at(level).clone();

    assignment.insert(var.clone(), false);
    let low = build_rec(formula, order, VarId(level.0 + 1), assignment, arena)?;

    assignment.insert(var.clone(), true);
    let high = build_rec(formula, order, VarId(level.0 + 1), assignment, arena)?;

    assignment.remove(&var);

    Ok(arena.make(level, low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_single_variable_has_three_arena_nodes() {
        let f = Formula::var("p");
        let bdd = build(&f, None).unwrap();
        // p -> (lo=0, hi=1), plus the two terminals.
        assert_eq!(bdd.arena_len(), 3);
    }

    #[test]
    fn build_rejects_variable_outside_supplied_order() {
        let f = Formula::and(Formula::var("p"), Formula::var("q"));
        let order = VariableOrder::new(vec!["p".into()]);
        let err = build(&f, Some(order)).unwrap_err();
        assert_eq!(err, BddError::UnknownVariable("q".into()));
    }

    #[test]
    fn build_constant_formula_is_a_single_terminal() {
        let f = Formula::constant(true);
        let bdd = build(&f, None).unwrap();
        assert_eq!(bdd.root(), crate::node::ONE);
    }
}
