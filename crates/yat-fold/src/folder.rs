//! Bottom-up, in-place constant folding.

use yat_eval::ops;
use yat_types::ast::*;
use yat_types::VisitorMut;

/// Fold `tree` in place and hand the same tree back.
pub fn fold(tree: &mut Node) -> &mut Node {
    ConstantFolder::new().fold(tree);
    tree
}

/// Visitor that folds every child slot after folding the child's own
/// subtree.
#[derive(Debug, Default)]
pub struct ConstantFolder {
    rewrites: usize,
}

impl ConstantFolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subtrees replaced by a literal so far.
    pub fn rewrites(&self) -> usize {
        self.rewrites
    }

    /// Fold the subtree in `slot`, then replace `slot` itself if it has
    /// become constant.
    pub fn fold(&mut self, slot: &mut Node) {
        slot.accept_mut(self);
        if let Some(value) = constant_value(slot) {
            tracing::debug!(kind = slot.kind_name(), value, "folded to literal");
            *slot = Node::Number(value);
            self.rewrites += 1;
        }
    }

    fn fold_all(&mut self, stmts: &mut [Node]) {
        for stmt in stmts {
            self.fold(stmt);
        }
    }
}

/// The literal a node can be replaced with, judged on its shape alone.
///
/// Eager evaluation that fails (division by zero, overflow) leaves the node
/// alone so the failure still happens at run time.
fn constant_value(node: &Node) -> Option<i64> {
    match node {
        Node::BinaryOperation { lhs, op, rhs } => match (&**lhs, *op, &**rhs) {
            (Node::Number(a), op, Node::Number(b)) => ops::apply_binary(op, *a, *b).ok(),
            (Node::Number(0), BinOp::Mul, Node::Reference(_))
            | (Node::Reference(_), BinOp::Mul, Node::Number(0)) => Some(0),
            (Node::Reference(a), BinOp::Sub, Node::Reference(b)) if a == b => Some(0),
            _ => None,
        },
        Node::UnaryOperation { op, operand } => match &**operand {
            Node::Number(a) => ops::apply_unary(*op, *a).ok(),
            _ => None,
        },
        _ => None,
    }
}

impl VisitorMut for ConstantFolder {
    type Output = ();

    fn visit_number(&mut self, _: &mut i64) {}

    fn visit_reference(&mut self, _: &mut String) {}

    fn visit_binary_operation(&mut self, lhs: &mut Node, _: &mut BinOp, rhs: &mut Node) {
        self.fold(lhs);
        self.fold(rhs);
    }

    fn visit_unary_operation(&mut self, _: &mut UnaryOp, operand: &mut Node) {
        self.fold(operand);
    }

    fn visit_assign(&mut self, _: &mut String, value: &mut Node) {
        self.fold(value);
    }

    fn visit_print(&mut self, expr: &mut Node) {
        self.fold(expr);
    }

    fn visit_read(&mut self, _: &mut String) {}

    fn visit_conditional(&mut self, conditional: &mut Conditional) {
        self.fold(&mut conditional.condition);
        self.fold_all(&mut conditional.if_true);
        if let Some(if_false) = &mut conditional.if_false {
            self.fold_all(if_false);
        }
    }

    fn visit_function(&mut self, function: &mut Function) {
        self.fold_all(&mut function.body);
    }

    fn visit_function_definition(&mut self, _: &mut String, function: &mut Function) {
        self.fold_all(&mut function.body);
    }

    fn visit_function_call(&mut self, callee: &mut Node, args: &mut [Node]) {
        self.fold(callee);
        self.fold_all(args);
    }
}
