//! Core expression and statement evaluator.

use crate::config::EvalConfig;
use crate::env::{Environment, ScopeId};
use crate::error::{EvalError, EvalResult};
use crate::ops;
use crate::value::Value;
use std::io::{BufRead, Write};
use std::rc::Rc;
use yat_types::ast::*;

/// The core evaluator: walks AST nodes and produces Values.
///
/// `read` consumes lines from `input`; `print` writes to `output`.
pub struct Evaluator<'io> {
    /// Scope arena. The root scope holds globals.
    pub env: Environment,
    /// Steps consumed so far.
    pub gas: u64,
    config: EvalConfig,
    call_depth: usize,
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Evaluator<'io> {
    /// Create an evaluator with the default limits.
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self::with_config(input, output, EvalConfig::default())
    }

    pub fn with_config(
        input: &'io mut dyn BufRead,
        output: &'io mut dyn Write,
        config: EvalConfig,
    ) -> Self {
        Self {
            env: Environment::new(),
            gas: 0,
            config,
            call_depth: 0,
            input,
            output,
        }
    }

    /// Consume one unit of gas. Returns error if exhausted.
    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        if self.gas > self.config.gas_limit {
            Err(EvalError::GasExhausted)
        } else {
            Ok(())
        }
    }

    /// Run a top-level statement sequence in the root scope.
    ///
    /// Returns the value of the last statement, or `None` for an empty
    /// program.
    pub fn run(&mut self, program: &[Node]) -> EvalResult<Option<Value>> {
        let root = self.env.root();
        let result = self.eval_sequence(program, root);
        self.output.flush()?;
        result
    }

    /// Evaluate statements in order; the value is that of the last one.
    pub fn eval_sequence(&mut self, stmts: &[Node], scope: ScopeId) -> EvalResult<Option<Value>> {
        let mut last = None;
        for stmt in stmts {
            last = Some(self.eval(stmt, scope)?);
        }
        Ok(last)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Node evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate a single node against `scope`.
    pub fn eval(&mut self, node: &Node, scope: ScopeId) -> EvalResult<Value> {
        self.tick()?;
        match node {
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::Reference(name) => self.env.lookup(scope, name),
            Node::BinaryOperation { lhs, op, rhs } => self.eval_binary(lhs, *op, rhs, scope),
            Node::UnaryOperation { op, operand } => self.eval_unary(*op, operand, scope),
            Node::Assign { name, value } => self.eval_assign(name, value, scope),
            Node::Print(expr) => self.eval_print(expr, scope),
            Node::Read(name) => self.eval_read(name, scope),
            Node::Conditional(conditional) => self.eval_conditional(conditional, scope),
            Node::Function(function) => Ok(Value::Function(Rc::new(function.clone()))),
            Node::FunctionDefinition { name, function } => {
                self.eval_definition(name, function, scope)
            }
            Node::FunctionCall { callee, args } => self.eval_call(callee, args, scope),
        }
    }

    /// Evaluate a node that must produce a number. `context` names the
    /// consumer in the mismatch message.
    fn eval_number(
        &mut self,
        node: &Node,
        scope: ScopeId,
        context: impl FnOnce() -> String,
    ) -> EvalResult<i64> {
        let value = self.eval(node, scope)?;
        value.as_number().ok_or_else(|| {
            EvalError::TypeMismatch(format!(
                "{} requires number, got {}",
                context(),
                value.type_name()
            ))
        })
    }

    // ── Operators ────────────────────────────────────────────────────────

    fn eval_binary(&mut self, lhs: &Node, op: BinOp, rhs: &Node, scope: ScopeId) -> EvalResult<Value> {
        let a = self.eval_number(lhs, scope, || format!("operator '{op}'"))?;
        let b = self.eval_number(rhs, scope, || format!("operator '{op}'"))?;
        ops::apply_binary(op, a, b).map(Value::Number)
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Node, scope: ScopeId) -> EvalResult<Value> {
        let a = self.eval_number(operand, scope, || format!("operator '{op}'"))?;
        ops::apply_unary(op, a).map(Value::Number)
    }

    // ── Statements ───────────────────────────────────────────────────────

    fn eval_assign(&mut self, name: &str, value: &Node, scope: ScopeId) -> EvalResult<Value> {
        let v = self.eval(value, scope)?;
        self.env.bind(scope, name, v.clone());
        Ok(v)
    }

    fn eval_print(&mut self, expr: &Node, scope: ScopeId) -> EvalResult<Value> {
        let n = self.eval_number(expr, scope, || "print".into())?;
        writeln!(self.output, "{n}")?;
        Ok(Value::Number(n))
    }

    /// Consume one line holding exactly one integer.
    fn eval_read(&mut self, name: &str, scope: ScopeId) -> EvalResult<Value> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EvalError::MalformedInput(format!(
                "end of input while reading '{name}'"
            )));
        }
        let token = line.trim();
        let n: i64 = token.parse().map_err(|_| {
            EvalError::MalformedInput(format!("expected an integer for '{name}', got {token:?}"))
        })?;
        self.env.bind(scope, name, Value::Number(n));
        Ok(Value::Number(n))
    }

    fn eval_conditional(&mut self, conditional: &Conditional, scope: ScopeId) -> EvalResult<Value> {
        let cond = self.eval_number(&conditional.condition, scope, || "condition".into())?;
        let branch = if cond != 0 {
            Some(conditional.if_true.as_slice())
        } else {
            conditional.if_false.as_deref()
        };
        self.eval_sequence(branch.unwrap_or_default(), scope)?
            .ok_or(EvalError::EmptyBranch)
    }

    fn eval_definition(&mut self, name: &str, function: &Function, scope: ScopeId) -> EvalResult<Value> {
        let value = Value::Function(Rc::new(function.clone()));
        self.env.bind(scope, name, value.clone());
        tracing::debug!(name, args = function.args.len(), "define function");
        Ok(value)
    }

    // ── Calls ────────────────────────────────────────────────────────────

    /// Call a function value.
    ///
    /// The new scope's parent is the caller's scope. Arguments are
    /// evaluated left to right inside the new scope, each bound before the
    /// next is evaluated.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    fn eval_call(&mut self, callee: &Node, args: &[Node], scope: ScopeId) -> EvalResult<Value> {
        let function = match self.eval(callee, scope)? {
            Value::Function(f) => f,
            other => {
                return Err(EvalError::TypeMismatch(format!(
                    "cannot call a {}",
                    other.type_name()
                )))
            }
        };
        if function.args.len() != args.len() {
            return Err(EvalError::ArityMismatch {
                expected: function.args.len(),
                found: args.len(),
            });
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(EvalError::CallDepthExceeded(self.config.max_call_depth));
        }

        let frame = self.env.push_child(scope);
        self.call_depth += 1;
        let result = self.eval_call_body(&function, args, frame);
        self.call_depth -= 1;
        self.env.pop_scope(frame);
        result
    }

    fn eval_call_body(&mut self, function: &Function, args: &[Node], frame: ScopeId) -> EvalResult<Value> {
        for (name, arg) in function.args.iter().zip(args) {
            let value = self.eval(arg, frame)?;
            self.env.bind(frame, name, value);
        }
        self.eval_sequence(&function.body, frame)?
            .ok_or(EvalError::EmptyBody)
    }
}
