//! Formula AST (C1, spec §4.1).
//!
//! A closed, immutable tagged variant over the canonical connective set.
//! The core consumes an already-parsed AST; tokenizing concrete surface
//! syntax into one of these is an external collaborator's job.

use std::fmt;
use std::rc::Rc;

use crate::error::BddError;
use crate::hash::HashMap;

/// An opaque variable name. Cheap to clone (`Rc<str>` under the hood) since
/// the same name is threaded through the AST, the variable order, and every
/// interpretation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(pub Rc<str>);

impl Variable {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Variable(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Variable::new(s)
    }
}

/// A finite mapping `Variable -> bool` (spec §6 "Interpretation input").
#[derive(Debug, Clone, Default)]
pub struct Interpretation(HashMap<Variable, bool>);

impl Interpretation {
    pub fn new() -> Self {
        Interpretation(HashMap::default())
    }

    pub fn set(&mut self, var: Variable, value: bool) -> &mut Self {
        self.0.insert(var, value);
        self
    }

    pub fn with(mut self, var: impl Into<Variable>, value: bool) -> Self {
        self.0.insert(var.into(), value);
        self
    }

    pub fn get(&self, var: &Variable) -> Option<bool> {
        self.0.get(var).copied()
    }

    /// Look up `var`, returning `UndefinedVariable` if it is absent
    /// (spec §6, §7).
    pub fn require(&self, var: &Variable) -> Result<bool, BddError> {
        self.get(var)
            .ok_or_else(|| BddError::UndefinedVariable(var.clone()))
    }
}

impl FromIterator<(Variable, bool)> for Interpretation {
    fn from_iter<T: IntoIterator<Item = (Variable, bool)>>(iter: T) -> Self {
        Interpretation(iter.into_iter().collect())
    }
}

/// Immutable tree of Boolean expressions over the canonical connective set
/// `{Var, Const, Not, And, Or, Implies, Iff}` (spec §4.1).
#[derive(Debug, Clone)]
pub enum Formula {
    Var(Variable),
    Const(bool),
    Not(Rc<Formula>),
    And(Rc<Formula>, Rc<Formula>),
    Or(Rc<Formula>, Rc<Formula>),
    Implies(Rc<Formula>, Rc<Formula>),
    Iff(Rc<Formula>, Rc<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<Variable>) -> Rc<Formula> {
        Rc::new(Formula::Var(name.into()))
    }

    pub fn constant(b: bool) -> Rc<Formula> {
        Rc::new(Formula::Const(b))
    }

    pub fn not(f: Rc<Formula>) -> Rc<Formula> {
        Rc::new(Formula::Not(f))
    }

    pub fn and(f: Rc<Formula>, g: Rc<Formula>) -> Rc<Formula> {
        Rc::new(Formula::And(f, g))
    }

    pub fn or(f: Rc<Formula>, g: Rc<Formula>) -> Rc<Formula> {
        Rc::new(Formula::Or(f, g))
    }

    pub fn implies(f: Rc<Formula>, g: Rc<Formula>) -> Rc<Formula> {
        Rc::new(Formula::Implies(f, g))
    }

    pub fn iff(f: Rc<Formula>, g: Rc<Formula>) -> Rc<Formula> {
        Rc::new(Formula::Iff(f, g))
    }

    /// Semantic evaluation under an interpretation (spec §4.1).
    /// `Implies(a,b) = ¬a ∨ b`; `Iff` is equality of the two booleans.
    pub fn eval(&self, interp: &Interpretation) -> Result<bool, BddError> {
        Ok(match self {
            Formula::Var(v) => interp.require(v)?,
            Formula::Const(b) => *b,
            Formula::Not(f) => !f.eval(interp)?,
            Formula::And(f, g) => f.eval(interp)? && g.eval(interp)?,
            Formula::Or(f, g) => f.eval(interp)? || g.eval(interp)?,
            Formula::Implies(f, g) => !f.eval(interp)? || g.eval(interp)?,
            Formula::Iff(f, g) => f.eval(interp)? == g.eval(interp)?,
        })
    }

    /// Free variables in deterministic source (first-occurrence) order.
    /// Used as the default variable ordering when the caller supplies none
    /// (spec §6).
    pub fn free_variables(&self) -> Vec<Variable> {
        let mut seen = crate::hash::HashSet::default();
        let mut out = Vec::new();
        self.collect_free_variables(&mut seen, &mut out);
        out
    }

    fn collect_free_variables(&self, seen: &mut crate::hash::HashSet<Variable>, out: &mut Vec<Variable>) {
        match self {
            Formula::Var(v) => {
                if seen.insert(v.clone()) {
                    out.push(v.clone());
                }
            }
            Formula::Const(_) => {}
            Formula::Not(f) => f.collect_free_variables(seen, out),
            Formula::And(f, g) | Formula::Or(f, g) | Formula::Implies(f, g) | Formula::Iff(f, g) => {
                f.collect_free_variables(seen, out);
                g.collect_free_variables(seen, out);
            }
        }
    }
}
