//! Error kinds for the core (spec §7). All errors are surfaced to the
//! caller; none are recovered internally. Invariant violations found by the
//! core itself (a redundant node surviving reduction, a dangling handle,
//! ...) are bugs, not user errors, and are reported with `panic!`/
//! `debug_assert!` rather than a variant here.

use std::fmt;

use crate::ast::Variable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BddError {
    /// The formula AST contains a malformed node (e.g. an operator applied
    /// with the wrong arity for its variant).
    MalformedFormula(String),
    /// A formula mentions a variable absent from the supplied variable
    /// order.
    UnknownVariable(Variable),
    /// The interpretation passed to `evaluate` omits a variable that the
    /// BDD actually branches on.
    UndefinedVariable(Variable),
    /// `apply`/`equivalent` received BDDs built under different variable
    /// orders.
    OrderMismatch,
    /// `apply` received BDDs allocated from distinct node stores.
    StoreMismatch,
    /// `apply` was asked for an operator it does not recognize (only
    /// relevant when operators are looked up dynamically, e.g. by name).
    InvalidOperator(String),
}

impl fmt::Display for BddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BddError::MalformedFormula(msg) => write!(f, "malformed formula: {msg}"),
            BddError::UnknownVariable(v) => {
                write!(f, "variable {:?} is not in the supplied variable order", v)
            }
            BddError::UndefinedVariable(v) => {
                write!(f, "interpretation does not assign variable {:?}", v)
            }
            BddError::OrderMismatch => {
                write!(f, "operands use different variable orders")
            }
            BddError::StoreMismatch => {
                write!(f, "operands belong to different node stores")
            }
            BddError::InvalidOperator(op) => write!(f, "unrecognized operator: {op}"),
        }
    }
}

impl std::error::Error for BddError {}
