//! Scope chain for the Yat evaluator.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use std::collections::BTreeMap;

/// Handle to a scope in an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(usize);

/// A single scope level.
#[derive(Debug, Clone)]
struct Scope {
    bindings: BTreeMap<String, Value>,
    /// Non-owning link to the enclosing scope.
    parent: Option<ScopeId>,
}

impl Scope {
    fn new(parent: Option<ScopeId>) -> Self {
        Self {
            bindings: BTreeMap::new(),
            parent,
        }
    }
}

/// Arena of scopes linked by parent handles.
///
/// Lookup consults the given scope first, then its parents. [`bind`]
/// rebinds the nearest scope in the chain that already owns the name and
/// only creates a new binding in the given scope when no scope owns it.
///
/// Scopes are released in LIFO order with [`pop_scope`]; a parent always
/// outlives its children because children are allocated after it.
///
/// [`bind`]: Environment::bind
/// [`pop_scope`]: Environment::pop_scope
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create a new environment with one global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(None)],
        }
    }

    /// The global scope.
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Number of live scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Allocate a child scope of `parent`.
    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::new(Some(parent)));
        tracing::trace!(scope = id.0, parent = parent.0, "push scope");
        id
    }

    /// Release `id` if it is the innermost scope. The global scope is never
    /// released.
    pub fn pop_scope(&mut self, id: ScopeId) {
        if id.0 > 0 && id.0 + 1 == self.scopes.len() {
            self.scopes.pop();
            tracing::trace!(scope = id.0, "pop scope");
        }
    }

    /// Look up a name, walking from `scope` through its parents.
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = &self.scopes[id.0];
            if let Some(v) = frame.bindings.get(name) {
                return Some(v);
            }
            current = frame.parent;
        }
        None
    }

    /// Like [`get`](Self::get), failing with `UnboundName` on a miss.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> EvalResult<Value> {
        self.get(scope, name)
            .cloned()
            .ok_or_else(|| EvalError::UnboundName(name.to_string()))
    }

    /// Whether `scope` itself (not a parent) binds `name`.
    pub fn contains_local(&self, scope: ScopeId, name: &str) -> bool {
        self.scopes[scope.0].bindings.contains_key(name)
    }

    /// Bind `name` in the nearest scope of the chain that owns it, or in
    /// `scope` itself if none does.
    pub fn bind(&mut self, scope: ScopeId, name: &str, value: Value) {
        let owner = self.owner_of(scope, name).unwrap_or(scope);
        tracing::trace!(scope = owner.0, name, %value, "bind");
        self.scopes[owner.0].bindings.insert(name.to_string(), value);
    }

    fn owner_of(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = &self.scopes[id.0];
            if frame.bindings.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
