//! Canonical text rendering.
//!
//! Statements are indented one tab per nesting level and end with `;` and a
//! newline. Inside an expression every operand of a unary or binary
//! operation is parenthesized, whatever the precedence.

use std::io::{self, Write};
use yat_types::ast::*;
use yat_types::Visitor;

/// Render a single tree.
pub fn pretty_print(tree: &Node) -> String {
    PrettyPrinter::new().render(tree)
}

/// Render a top-level statement sequence.
pub fn print_program(stmts: &[Node]) -> String {
    let mut printer = PrettyPrinter::new();
    stmts.iter().map(|stmt| printer.render(stmt)).collect()
}

/// Render `tree` and mirror the text to `sink`.
pub fn emit(tree: &Node, sink: &mut dyn Write) -> io::Result<String> {
    let text = pretty_print(tree);
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(text)
}

/// Visitor state: output buffer, nesting depth and whether the node being
/// visited sits inside an expression.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    out: String,
    depth: usize,
    arithmetic: bool,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `tree` as a top-level statement.
    pub fn render(&mut self, tree: &Node) -> String {
        self.out.clear();
        self.depth = 0;
        self.arithmetic = false;
        tree.accept(self);
        tracing::trace!(kind = tree.kind_name(), len = self.out.len(), "rendered");
        std::mem::take(&mut self.out)
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push('\t');
        }
    }

    fn terminate(&mut self) {
        self.out.push_str(";\n");
    }

    /// Render `node` as an expression fragment.
    fn expr(&mut self, node: &Node) {
        let saved = std::mem::replace(&mut self.arithmetic, true);
        node.accept(self);
        self.arithmetic = saved;
    }

    /// Render statements one level deeper.
    fn block(&mut self, stmts: &[Node]) {
        let saved = std::mem::replace(&mut self.arithmetic, false);
        self.depth += 1;
        for stmt in stmts {
            stmt.accept(self);
        }
        self.depth -= 1;
        self.arithmetic = saved;
    }

    /// `def name(a, b) {` ... `}` without the terminator.
    fn function(&mut self, name: &str, function: &Function) {
        self.out.push_str("def ");
        self.out.push_str(name);
        self.out.push('(');
        self.out.push_str(&function.args.join(", "));
        self.out.push_str(") {\n");
        self.block(&function.body);
        self.indent();
        self.out.push('}');
    }

    /// Leaf text, with statement framing when outside an expression.
    fn atom(&mut self, text: &str) {
        if self.arithmetic {
            self.out.push_str(text);
        } else {
            self.indent();
            self.out.push_str(text);
            self.terminate();
        }
    }
}

impl Visitor for PrettyPrinter {
    type Output = ();

    fn visit_number(&mut self, value: i64) {
        self.atom(&value.to_string());
    }

    fn visit_reference(&mut self, name: &str) {
        self.atom(name);
    }

    fn visit_binary_operation(&mut self, lhs: &Node, op: BinOp, rhs: &Node) {
        let statement = !self.arithmetic;
        if statement {
            self.indent();
        }
        self.out.push('(');
        self.expr(lhs);
        self.out.push_str(") ");
        self.out.push_str(op.as_str());
        self.out.push_str(" (");
        self.expr(rhs);
        self.out.push(')');
        if statement {
            self.terminate();
        }
    }

    fn visit_unary_operation(&mut self, op: UnaryOp, operand: &Node) {
        let statement = !self.arithmetic;
        if statement {
            self.indent();
        }
        self.out.push_str(op.as_str());
        self.out.push('(');
        self.expr(operand);
        self.out.push(')');
        if statement {
            self.terminate();
        }
    }

    fn visit_assign(&mut self, name: &str, value: &Node) {
        self.indent();
        self.out.push_str(name);
        self.out.push_str(" = ");
        self.expr(value);
        self.terminate();
    }

    fn visit_print(&mut self, expr: &Node) {
        self.indent();
        self.out.push_str("print ");
        self.expr(expr);
        self.terminate();
    }

    fn visit_read(&mut self, name: &str) {
        self.indent();
        self.out.push_str("read ");
        self.out.push_str(name);
        self.terminate();
    }

    fn visit_conditional(&mut self, conditional: &Conditional) {
        self.indent();
        self.out.push_str("if (");
        self.expr(&conditional.condition);
        self.out.push_str(") {\n");
        self.block(&conditional.if_true);
        self.indent();
        self.out.push('}');
        if let Some(if_false) = conditional.if_false.as_deref().filter(|b| !b.is_empty()) {
            self.out.push_str(" else {\n");
            self.block(if_false);
            self.indent();
            self.out.push('}');
        }
        self.terminate();
    }

    fn visit_function(&mut self, function: &Function) {
        let statement = !self.arithmetic;
        if statement {
            self.indent();
        }
        self.function("", function);
        if statement {
            self.terminate();
        }
    }

    fn visit_function_definition(&mut self, name: &str, function: &Function) {
        self.indent();
        self.function(name, function);
        self.terminate();
    }

    fn visit_function_call(&mut self, callee: &Node, args: &[Node]) {
        let statement = !self.arithmetic;
        if statement {
            self.indent();
        }
        self.expr(callee);
        self.out.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expr(arg);
        }
        self.out.push(')');
        if statement {
            self.terminate();
        }
    }
}
