//! Variable order (C7, spec §4.7).
//!
//! A total order on variables, consulted by the Builder, Reducer and
//! Apply. Immutable once constructed; two BDDs interacting through `apply`
//! must share the *same* order, checked structurally as equal `vars`
//! sequences (see the `PartialEq` impl below) rather than by reference
//! identity.

use crate::ast::Variable;
use crate::error::BddError;
use crate::hash::HashMap;
use crate::node::VarId;

#[derive(Debug, Clone)]
pub struct VariableOrder {
    /// `vars[i]` is the variable at position `i` (0 = first / topmost).
    vars: Vec<Variable>,
    index: HashMap<Variable, VarId>,
}

impl VariableOrder {
    pub fn new(vars: Vec<Variable>) -> Self {
        let mut index = HashMap::default();
        for (i, v) in vars.iter().enumerate() {
            index.insert(v.clone(), VarId(i));
        }
        VariableOrder { vars, index }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn variable_at(&self, pos: VarId) -> &Variable {
        &self.vars[pos.0]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.vars
    }

    /// Position of `v` in the order, or `None` if `v` is not part of it.
    pub fn index(&self, v: &Variable) -> Option<VarId> {
        self.index.get(v).copied()
    }

    pub fn require_index(&self, v: &Variable) -> Result<VarId, BddError> {
        self.index(v).ok_or_else(|| BddError::UnknownVariable(v.clone()))
    }

    /// The variable whose index is smaller (spec §4.5: "earliest variable
    /// among {var(f), var(g)}").
    pub fn earliest(&self, a: VarId, b: VarId) -> VarId {
        if a.0 <= b.0 {
            a
        } else {
            b
        }
    }
}

impl PartialEq for VariableOrder {
    fn eq(&self, other: &Self) -> bool {
        self.vars == other.vars
    }
}
impl Eq for VariableOrder {}
