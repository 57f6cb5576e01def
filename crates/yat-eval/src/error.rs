//! Runtime error types for the Yat evaluator.

use thiserror::Error;

/// Evaluation failure. The first failure aborts the rest of evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Name not bound anywhere in the scope chain.
    #[error("unbound name: {0}")]
    UnboundName(String),
    /// Argument count differs from the function's parameter count.
    #[error("arity mismatch: function takes {expected} argument(s), {found} given")]
    ArityMismatch { expected: usize, found: usize },
    /// Division or modulo by zero, integer overflow.
    #[error("arithmetic failure: {0}")]
    ArithmeticFailure(String),
    /// `read` hit end of input or a line that is not one integer.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// The taken branch of a conditional has no statements.
    #[error("conditional branch is empty")]
    EmptyBranch,
    /// A called function has no body statements.
    #[error("function body is empty")]
    EmptyBody,
    /// A function where a number is required, or a call on a number.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// Step limit exceeded.
    #[error("gas exhausted")]
    GasExhausted,
    /// Nested calls exceeded the configured depth.
    #[error("call depth exceeded (limit {0})")]
    CallDepthExceeded(usize),
    /// The output sink or input source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
