//! Tests for the AST model: operators, JSON interchange, visitor dispatch.

use yat_types::ast::*;
use yat_types::{ParseOperatorError, Visitor, VisitorMut};

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn binop_symbols_parse_back() {
    for op in BinOp::ALL {
        assert_eq!(op.as_str().parse::<BinOp>(), Ok(op));
    }
}

#[test]
fn binop_rejects_unknown_symbol() {
    let err = "**".parse::<BinOp>().unwrap_err();
    assert_eq!(
        err,
        ParseOperatorError {
            kind: "binary",
            symbol: "**".into()
        }
    );
}

#[test]
fn unary_symbols() {
    assert_eq!("-".parse::<UnaryOp>(), Ok(UnaryOp::Neg));
    assert_eq!("!".parse::<UnaryOp>(), Ok(UnaryOp::Not));
    assert!("+".parse::<UnaryOp>().is_err());
    assert_eq!(UnaryOp::Not.to_string(), "!");
}

// ══════════════════════════════════════════════════════════════════════════════
// JSON interchange
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn json_uses_operator_symbols() {
    let node = Node::binary(Node::number(1), BinOp::LessEq, Node::reference("x"));
    let json = node.to_json().unwrap();
    assert!(json.contains(r#""op":"<=""#), "{json}");
}

#[test]
fn json_from_external_parser() {
    let json = r#"{
        "FunctionDefinition": {
            "name": "inc",
            "function": {
                "args": ["x"],
                "body": [
                    {"Print": {"BinaryOperation": {
                        "lhs": {"Reference": "x"},
                        "op": "+",
                        "rhs": {"Number": 1}
                    }}}
                ]
            }
        }
    }"#;
    let node = Node::from_json(json).unwrap();
    let expected = Node::definition(
        "inc",
        Function::new(
            vec!["x".into()],
            vec![Node::print(Node::binary(
                Node::reference("x"),
                BinOp::Add,
                Node::number(1),
            ))],
        ),
    );
    assert_eq!(node, expected);
}

#[test]
fn json_conditional_without_else() {
    let node = Node::conditional(Node::number(1), vec![Node::read("x")], None);
    let json = node.to_json().unwrap();
    assert!(!json.contains("if_false"), "{json}");
    assert_eq!(Node::from_json(&json).unwrap(), node);
}

#[test]
fn json_rejects_unknown_operator() {
    let json = r#"{"UnaryOperation": {"op": "~", "operand": {"Number": 1}}}"#;
    assert!(Node::from_json(json).is_err());
}

// ══════════════════════════════════════════════════════════════════════════════
// Visitor dispatch
// ══════════════════════════════════════════════════════════════════════════════

/// Collects node kind names in visiting order.
struct KindCollector {
    kinds: Vec<&'static str>,
}

impl Visitor for KindCollector {
    type Output = ();

    fn visit_number(&mut self, _: i64) {
        self.kinds.push("Number");
    }
    fn visit_reference(&mut self, _: &str) {
        self.kinds.push("Reference");
    }
    fn visit_binary_operation(&mut self, lhs: &Node, _: BinOp, rhs: &Node) {
        self.kinds.push("BinaryOperation");
        lhs.accept(self);
        rhs.accept(self);
    }
    fn visit_unary_operation(&mut self, _: UnaryOp, operand: &Node) {
        self.kinds.push("UnaryOperation");
        operand.accept(self);
    }
    fn visit_assign(&mut self, _: &str, value: &Node) {
        self.kinds.push("Assign");
        value.accept(self);
    }
    fn visit_print(&mut self, expr: &Node) {
        self.kinds.push("Print");
        expr.accept(self);
    }
    fn visit_read(&mut self, _: &str) {
        self.kinds.push("Read");
    }
    fn visit_conditional(&mut self, conditional: &Conditional) {
        self.kinds.push("Conditional");
        conditional.condition.accept(self);
        for stmt in &conditional.if_true {
            stmt.accept(self);
        }
        for stmt in conditional.if_false.iter().flatten() {
            stmt.accept(self);
        }
    }
    fn visit_function(&mut self, function: &Function) {
        self.kinds.push("Function");
        for stmt in &function.body {
            stmt.accept(self);
        }
    }
    fn visit_function_definition(&mut self, _: &str, function: &Function) {
        self.kinds.push("FunctionDefinition");
        self.visit_function(function);
    }
    fn visit_function_call(&mut self, callee: &Node, args: &[Node]) {
        self.kinds.push("FunctionCall");
        callee.accept(self);
        for arg in args {
            arg.accept(self);
        }
    }
}

#[test]
fn accept_dispatches_by_kind() {
    let tree = Node::conditional(
        Node::unary(UnaryOp::Not, Node::reference("a")),
        vec![Node::assign("x", Node::number(1))],
        Some(vec![Node::call(Node::reference("f"), vec![Node::number(2)])]),
    );
    let mut collector = KindCollector { kinds: Vec::new() };
    tree.accept(&mut collector);
    assert_eq!(
        collector.kinds,
        vec![
            "Conditional",
            "UnaryOperation",
            "Reference",
            "Assign",
            "Number",
            "FunctionCall",
            "Reference",
            "Number",
        ]
    );
}

/// Renames every reference in place.
struct Renamer;

impl VisitorMut for Renamer {
    type Output = ();

    fn visit_number(&mut self, _: &mut i64) {}
    fn visit_reference(&mut self, name: &mut String) {
        name.push('_');
    }
    fn visit_binary_operation(&mut self, lhs: &mut Node, _: &mut BinOp, rhs: &mut Node) {
        lhs.accept_mut(self);
        rhs.accept_mut(self);
    }
    fn visit_unary_operation(&mut self, _: &mut UnaryOp, operand: &mut Node) {
        operand.accept_mut(self);
    }
    fn visit_assign(&mut self, _: &mut String, value: &mut Node) {
        value.accept_mut(self);
    }
    fn visit_print(&mut self, expr: &mut Node) {
        expr.accept_mut(self);
    }
    fn visit_read(&mut self, _: &mut String) {}
    fn visit_conditional(&mut self, conditional: &mut Conditional) {
        conditional.condition.accept_mut(self);
    }
    fn visit_function(&mut self, _: &mut Function) {}
    fn visit_function_definition(&mut self, _: &mut String, _: &mut Function) {}
    fn visit_function_call(&mut self, callee: &mut Node, args: &mut [Node]) {
        callee.accept_mut(self);
        for arg in args {
            arg.accept_mut(self);
        }
    }
}

#[test]
fn accept_mut_rewrites_in_place() {
    let mut tree = Node::call(
        Node::reference("f"),
        vec![Node::binary(Node::reference("a"), BinOp::Sub, Node::number(1))],
    );
    tree.accept_mut(&mut Renamer);
    assert_eq!(
        tree,
        Node::call(
            Node::reference("f_"),
            vec![Node::binary(Node::reference("a_"), BinOp::Sub, Node::number(1))],
        )
    );
}

#[test]
fn kind_names() {
    assert_eq!(Node::number(1).kind_name(), "Number");
    assert_eq!(Node::read("x").kind_name(), "Read");
    assert_eq!(Node::function(vec![], vec![]).kind_name(), "Function");
    assert_eq!(Node::number(7).as_number(), Some(7));
    assert_eq!(Node::reference("q").as_reference(), Some("q"));
    assert_eq!(Node::reference("q").as_number(), None);
}
