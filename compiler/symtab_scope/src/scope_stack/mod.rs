//! Current-scope tracking for front-ends.
//!
//! The symbol table never infers nesting from call order; a front-end
//! walking its syntax tree pushes a scope when it enters a construct and
//! pops it on exit. `ScopeStack` is that bookkeeping.

use symtab_ir::ScopeId;

/// Stack of active scopes, innermost last.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    stack: Vec<ScopeId>,
}

impl ScopeStack {
    /// Create a stack whose bottom is `root`.
    pub fn new(root: ScopeId) -> Self {
        Self { stack: vec![root] }
    }

    /// Enter `scope`.
    pub fn push(&mut self, scope: ScopeId) {
        self.stack.push(scope);
    }

    /// Leave the innermost scope. The root is never popped.
    pub fn pop(&mut self) -> Option<ScopeId> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Innermost active scope.
    pub fn current(&self) -> ScopeId {
        // The root is never popped, so the stack is never empty.
        self.stack[self.stack.len() - 1]
    }

    /// Number of scopes entered above the root.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}

#[cfg(test)]
mod tests;
