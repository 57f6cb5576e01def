//! Visitor dispatch over the closed node set.
//!
//! - [`Visitor`]: read-only traversal producing an `Output` per node
//! - [`VisitorMut`]: in-place traversal for rewriting passes
//!
//! A node never knows which pass is visiting it; [`Node::accept`] and
//! [`Node::accept_mut`] only select the method keyed by the node kind.
//! Recursing into children is the visitor's job.

use crate::ast::{BinOp, Conditional, Function, Node, UnaryOp};

/// Read-only visitor, one method per node kind.
pub trait Visitor {
    type Output;

    fn visit_number(&mut self, value: i64) -> Self::Output;
    fn visit_reference(&mut self, name: &str) -> Self::Output;
    fn visit_binary_operation(&mut self, lhs: &Node, op: BinOp, rhs: &Node) -> Self::Output;
    fn visit_unary_operation(&mut self, op: UnaryOp, operand: &Node) -> Self::Output;
    fn visit_assign(&mut self, name: &str, value: &Node) -> Self::Output;
    fn visit_print(&mut self, expr: &Node) -> Self::Output;
    fn visit_read(&mut self, name: &str) -> Self::Output;
    fn visit_conditional(&mut self, conditional: &Conditional) -> Self::Output;
    fn visit_function(&mut self, function: &Function) -> Self::Output;
    fn visit_function_definition(&mut self, name: &str, function: &Function) -> Self::Output;
    fn visit_function_call(&mut self, callee: &Node, args: &[Node]) -> Self::Output;
}

/// Mutable visitor. Children are handed out as `&mut Node` slots, so an
/// implementation can overwrite a child with `*slot = replacement`.
pub trait VisitorMut {
    type Output;

    fn visit_number(&mut self, value: &mut i64) -> Self::Output;
    fn visit_reference(&mut self, name: &mut String) -> Self::Output;
    fn visit_binary_operation(
        &mut self,
        lhs: &mut Node,
        op: &mut BinOp,
        rhs: &mut Node,
    ) -> Self::Output;
    fn visit_unary_operation(&mut self, op: &mut UnaryOp, operand: &mut Node) -> Self::Output;
    fn visit_assign(&mut self, name: &mut String, value: &mut Node) -> Self::Output;
    fn visit_print(&mut self, expr: &mut Node) -> Self::Output;
    fn visit_read(&mut self, name: &mut String) -> Self::Output;
    fn visit_conditional(&mut self, conditional: &mut Conditional) -> Self::Output;
    fn visit_function(&mut self, function: &mut Function) -> Self::Output;
    fn visit_function_definition(
        &mut self,
        name: &mut String,
        function: &mut Function,
    ) -> Self::Output;
    fn visit_function_call(&mut self, callee: &mut Node, args: &mut [Node]) -> Self::Output;
}

impl Node {
    /// Dispatch to the visitor method for this node's kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Reference(name) => visitor.visit_reference(name),
            Node::BinaryOperation { lhs, op, rhs } => visitor.visit_binary_operation(lhs, *op, rhs),
            Node::UnaryOperation { op, operand } => visitor.visit_unary_operation(*op, operand),
            Node::Assign { name, value } => visitor.visit_assign(name, value),
            Node::Print(expr) => visitor.visit_print(expr),
            Node::Read(name) => visitor.visit_read(name),
            Node::Conditional(conditional) => visitor.visit_conditional(conditional),
            Node::Function(function) => visitor.visit_function(function),
            Node::FunctionDefinition { name, function } => {
                visitor.visit_function_definition(name, function)
            }
            Node::FunctionCall { callee, args } => visitor.visit_function_call(callee, args),
        }
    }

    /// Mutable counterpart of [`Node::accept`].
    pub fn accept_mut<V: VisitorMut + ?Sized>(&mut self, visitor: &mut V) -> V::Output {
        match self {
            Node::Number(value) => visitor.visit_number(value),
            Node::Reference(name) => visitor.visit_reference(name),
            Node::BinaryOperation { lhs, op, rhs } => visitor.visit_binary_operation(lhs, op, rhs),
            Node::UnaryOperation { op, operand } => visitor.visit_unary_operation(op, operand),
            Node::Assign { name, value } => visitor.visit_assign(name, value),
            Node::Print(expr) => visitor.visit_print(expr),
            Node::Read(name) => visitor.visit_read(name),
            Node::Conditional(conditional) => visitor.visit_conditional(conditional),
            Node::Function(function) => visitor.visit_function(function),
            Node::FunctionDefinition { name, function } => {
                visitor.visit_function_definition(name, function)
            }
            Node::FunctionCall { callee, args } => visitor.visit_function_call(callee, args),
        }
    }
}
