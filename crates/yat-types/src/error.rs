use thiserror::Error;

/// An operator symbol that is not part of the language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} operator '{symbol}'")]
pub struct ParseOperatorError {
    /// `"binary"` or `"unary"`.
    pub kind: &'static str,
    pub symbol: String,
}

impl ParseOperatorError {
    pub(crate) fn binary(symbol: &str) -> Self {
        Self {
            kind: "binary",
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn unary(symbol: &str) -> Self {
        Self {
            kind: "unary",
            symbol: symbol.to_string(),
        }
    }
}
