//! Yat tree-walking evaluator.
//!
//! Executes Yat programs directly from the AST. Scopes live in an arena
//! ([`Environment`]) and I/O collaborators are injected into the
//! [`Evaluator`], so evaluation is testable with captured streams.

pub mod config;
pub mod env;
pub mod error;
pub mod evaluator;
pub mod ops;
pub mod value;

pub use config::EvalConfig;
pub use env::{Environment, ScopeId};
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use value::Value;
