//! Reduced Ordered Binary Decision Diagrams.
//!
//! A [`Formula`](ast::Formula) is lowered by the [`builder`] into an
//! unordered decision tree, canonicalized by [`reduce`] into a
//! [`Bdd`](bdd::Bdd) backed by a hash-consing [`store`], and combined with
//! other `Bdd`s through [`apply`]. [`query`] holds the read-only operations
//! over an already-built `Bdd`; [`order`] is the variable ordering every
//! other component is parameterized over.

pub mod apply;
pub mod ast;
pub mod bdd;
pub mod builder;
pub mod error;
pub mod hash;
pub mod node;
pub mod order;
pub mod query;
pub mod reduce;
pub mod store;
pub mod tree;
pub mod unreduced;

pub use apply::{apply as apply_op, BoolOp};
pub use ast::{Formula, Interpretation, Variable};
pub use bdd::Bdd;
pub use builder::build;
pub use error::BddError;
pub use node::{NodeId, VarId};
pub use order::VariableOrder;
pub use reduce::{reduce, ReduceStats};
pub use unreduced::UnreducedBdd;
