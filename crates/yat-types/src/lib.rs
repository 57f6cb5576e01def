//! Shared types for the Yat interpreter.
//!
//! This crate defines the AST node types, the operator enums, and the
//! visitor protocol that the evaluator, constant folder and pretty printer
//! are built on.

mod error;
pub mod ast;
pub mod visit;

pub use ast::{BinOp, Conditional, Function, Node, UnaryOp};
pub use error::ParseOperatorError;
pub use visit::{Visitor, VisitorMut};
