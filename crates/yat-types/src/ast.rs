//! AST node types for the Yat language.
//!
//! The node set is closed: every pass matches on [`Node`] exhaustively.
//! Children are owned slots (`Box<Node>` / `Vec<Node>`) so a rewriting pass
//! can replace a single child in place without rebuilding its ancestors.

use crate::error::ParseOperatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ══════════════════════════════════════════════════════════════════════════════
// Nodes
// ══════════════════════════════════════════════════════════════════════════════

/// A single expression or statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// `42`
    Number(i64),
    /// `name`: variable or function lookup.
    Reference(String),
    /// `lhs op rhs`
    BinaryOperation {
        lhs: Box<Node>,
        op: BinOp,
        rhs: Box<Node>,
    },
    /// `-x`, `!x`
    UnaryOperation { op: UnaryOp, operand: Box<Node> },
    /// `name = value`
    Assign { name: String, value: Box<Node> },
    /// `print expr`
    Print(Box<Node>),
    /// `read name`
    Read(String),
    /// `if (cond) { ... } else { ... }`
    Conditional(Box<Conditional>),
    /// An anonymous function value.
    Function(Function),
    /// `def name(args) { body }`
    FunctionDefinition { name: String, function: Function },
    /// `callee(args...)`
    FunctionCall { callee: Box<Node>, args: Vec<Node> },
}

/// A first-class function: formal argument names plus a statement body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Function {
    pub args: Vec<String>,
    pub body: Vec<Node>,
}

impl Function {
    pub fn new(args: Vec<String>, body: Vec<Node>) -> Self {
        Self { args, body }
    }
}

/// `if (condition) { if_true } [else { if_false }]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Node,
    pub if_true: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_false: Option<Vec<Node>>,
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Node::Reference(name.into())
    }

    pub fn binary(lhs: Node, op: BinOp, rhs: Node) -> Self {
        Node::BinaryOperation {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::UnaryOperation {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Node::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn print(expr: Node) -> Self {
        Node::Print(Box::new(expr))
    }

    pub fn read(name: impl Into<String>) -> Self {
        Node::Read(name.into())
    }

    pub fn conditional(condition: Node, if_true: Vec<Node>, if_false: Option<Vec<Node>>) -> Self {
        Node::Conditional(Box::new(Conditional {
            condition,
            if_true,
            if_false,
        }))
    }

    pub fn function(args: Vec<String>, body: Vec<Node>) -> Self {
        Node::Function(Function::new(args, body))
    }

    pub fn definition(name: impl Into<String>, function: Function) -> Self {
        Node::FunctionDefinition {
            name: name.into(),
            function,
        }
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::FunctionCall {
            callee: Box::new(callee),
            args,
        }
    }

    /// The literal value if this node is a `Number`.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Node::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The name if this node is a `Reference`.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Node::Reference(name) => Some(name),
            _ => None,
        }
    }

    /// Node kind name, used in diagnostics and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "Number",
            Node::Reference(_) => "Reference",
            Node::BinaryOperation { .. } => "BinaryOperation",
            Node::UnaryOperation { .. } => "UnaryOperation",
            Node::Assign { .. } => "Assign",
            Node::Print(_) => "Print",
            Node::Read(_) => "Read",
            Node::Conditional(_) => "Conditional",
            Node::Function(_) => "Function",
            Node::FunctionDefinition { .. } => "FunctionDefinition",
            Node::FunctionCall { .. } => "FunctionCall",
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a tree handed over by an external parser.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ── Binary Operators ──────────────────────────────────────────────────────────

/// Binary operators. Comparisons and logical operators produce 1 or 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">=")]
    GreaterEq,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl BinOp {
    pub const ALL: [BinOp; 13] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Div,
        BinOp::Mod,
        BinOp::Eq,
        BinOp::NotEq,
        BinOp::Less,
        BinOp::Greater,
        BinOp::LessEq,
        BinOp::GreaterEq,
        BinOp::And,
        BinOp::Or,
    ];

    /// The operator symbol as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Less => "<",
            BinOp::Greater => ">",
            BinOp::LessEq => "<=",
            BinOp::GreaterEq => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinOp {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseOperatorError::binary(s))
    }
}

// ── Unary Operators ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `-x`
    #[serde(rename = "-")]
    Neg,
    /// `!x`
    #[serde(rename = "!")]
    Not,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnaryOp {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(UnaryOp::Neg),
            "!" => Ok(UnaryOp::Not),
            _ => Err(ParseOperatorError::unary(s)),
        }
    }
}
