//! The public, canonical BDD handle: a root node plus the store and
//! variable order it was built against (spec §3 "A BDD carries...").
//!
//! Two `Bdd`s share ownership of a store exactly when they were produced
//! from the same `reduce`/`apply` lineage; `Rc<RefCell<_>>` models that
//! shared, single-threaded mutable resource (spec §5: "the node store is
//! the only shared mutable resource").

use std::cell::RefCell;
use std::rc::Rc;

use crate::apply::{apply, BoolOp};
use crate::ast::{Interpretation, Variable};
use crate::error::BddError;
use crate::node::{Node, NodeId, VarId};
use crate::order::VariableOrder;
use crate::query;
use crate::store::NodeStore;

#[derive(Clone)]
pub struct Bdd {
    pub(crate) store: Rc<RefCell<NodeStore>>,
    pub(crate) root: NodeId,
    pub(crate) order: Rc<VariableOrder>,
}

impl Bdd {
    pub(crate) fn from_parts(store: NodeStore, root: NodeId, order: VariableOrder) -> Self {
        Bdd {
            store: Rc::new(RefCell::new(store)),
            root,
            order: Rc::new(order),
        }
    }

    /// Construct a `Bdd` sharing an existing store/order — used internally
    /// by `apply` to wrap its result without copying.
    pub(crate) fn with_shared(&self, root: NodeId) -> Self {
        Bdd {
            store: self.store.clone(),
            root,
            order: self.order.clone(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn order(&self) -> Rc<VariableOrder> {
        self.order.clone()
    }

    pub(crate) fn same_store(&self, other: &Bdd) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    pub(crate) fn node(&self, id: NodeId) -> Node {
        self.store.borrow().node(id)
    }

    pub fn evaluate(&self, interp: &Interpretation) -> Result<bool, BddError> {
        query::evaluate(self, interp)
    }

    pub fn is_satisfiable(&self) -> bool {
        query::is_satisfiable(self)
    }

    pub fn is_valid(&self) -> bool {
        query::is_valid(self)
    }

    pub fn count_nodes(&self) -> usize {
        query::count_nodes(self)
    }

    pub fn equivalent(&self, other: &Bdd) -> Result<bool, BddError> {
        query::equivalent(self, other)
    }

    pub fn not(&self) -> Bdd {
        query::logical_not(self)
    }

    pub fn and(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::And, self, other)
    }

    pub fn or(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Or, self, other)
    }

    pub fn xor(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Xor, self, other)
    }

    pub fn implies(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Implies, self, other)
    }

    pub fn iff(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Iff, self, other)
    }

    pub fn nand(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Nand, self, other)
    }

    pub fn nor(&self, other: &Bdd) -> Result<Bdd, BddError> {
        apply(BoolOp::Nor, self, other)
    }

    /// Single-variable cofactor `f[v -> value]` — the same restriction
    /// Apply already performs internally per node, exposed directly.
    pub fn restrict(&self, v: &Variable, value: bool) -> Result<Bdd, BddError> {
        let target = self.order.require_index(v)?;
        let new_root = self.restrict_rec(self.root, target, value);
        Ok(self.with_shared(new_root))
    }

    fn restrict_rec(&self, id: NodeId, target: VarId, value: bool) -> NodeId {
        match self.node(id) {
            Node::Terminal(_) => id,
            Node::Internal { var, low, high } => {
                if var.0 > target.0 {
                    // Variable does not occur below this point in the order.
                    id
                } else if var == target {
                    if value {
                        high
                    } else {
                        low
                    }
                } else {
                    let new_low = self.restrict_rec(low, target, value);
                    let new_high = self.restrict_rec(high, target, value);
                    self.store.borrow_mut().make(var, new_low, new_high)
                }
            }
        }
    }

    /// One satisfying interpretation, if any.
    pub fn any_satisfying_assignment(&self) -> Option<Interpretation> {
        query::any_satisfying_assignment(self)
    }

    /// Number of satisfying assignments over `total_vars` variables.
    /// `total_vars` must be at least the number of variables in this BDD's
    /// order; variables beyond those the BDD branches on are free and each
    /// doubles the count.
    pub fn count_satisfying_assignments(&self, total_vars: usize) -> u128 {
        query::count_satisfying_assignments(self, total_vars)
    }

    /// Rebuild this function into a different store/order (spec §4.6,
    /// §9 "Equivalence cross-store": rebuilding is an explicit operation a
    /// caller performs, never an implicit fallback inside `equivalent`).
    pub fn rebuild_into(&self, target: &Bdd) -> Result<Bdd, BddError> {
        let mut memo = crate::hash::HashMap::default();
        let new_root = self.rebuild_rec(self.root, target, &mut memo)?;
        Ok(target.with_shared(new_root))
    }

    fn rebuild_rec(
        &self,
        id: NodeId,
        target: &Bdd,
        memo: &mut crate::hash::HashMap<NodeId, NodeId>,
    ) -> Result<NodeId, BddError> {
        if let Some(&done) = memo.get(&id) {
            return Ok(done);
        }
        let result = match self.node(id) {
            Node::Terminal(b) => target.store.borrow().terminal(b),
            Node::Internal { var, low, high } => {
                let name = self.order.variable_at(var);
                let target_var = target.order.require_index(name)?;
                let new_low = self.rebuild_rec(low, target, memo)?;
                let new_high = self.rebuild_rec(high, target, memo)?;
                target.store.borrow_mut().make(target_var, new_low, new_high)
            }
        };
        memo.insert(id, result);
        Ok(result)
    }
}

impl std::fmt::Debug for Bdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bdd {{ root: {:?}, nodes reachable: {} }}",
            self.root,
            self.count_nodes()
        )
    }
}

impl std::ops::Not for &Bdd {
    type Output = Bdd;
    fn not(self) -> Bdd {
        self.not()
    }
}

impl std::ops::BitAnd for &Bdd {
    type Output = Result<Bdd, BddError>;
    fn bitand(self, rhs: Self) -> Result<Bdd, BddError> {
        self.and(rhs)
    }
}

impl std::ops::BitOr for &Bdd {
    type Output = Result<Bdd, BddError>;
    fn bitor(self, rhs: Self) -> Result<Bdd, BddError> {
        self.or(rhs)
    }
}

impl std::ops::BitXor for &Bdd {
    type Output = Result<Bdd, BddError>;
    fn bitxor(self, rhs: Self) -> Result<Bdd, BddError> {
        self.xor(rhs)
    }
}
