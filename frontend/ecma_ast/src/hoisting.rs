//! Per-scope hoisting bookkeeping.
//!
//! The parser opens a [`HoistingScope`] when it enters a function or
//! program body, feeds it every declaration it encounters while walking
//! that body, and closes it at scope exit. The scope-binding builder
//! consumes the result exactly once to materialize the scope's
//! variable/function/class environment.
//!
//! Insertion order is load-bearing: later passes derive initialization
//! order and duplicate-declaration diagnostics from it, so nothing here
//! deduplicates or reorders. Duplicate detection itself is explicitly not
//! this layer's job.

use crate::{AstArena, NodeId, NodeType};

/// Accumulator of declarations for one function or program scope.
///
/// Write-once during the body's traversal, read-once at scope exit, then
/// discarded. Single-threaded by design: exactly one parsing thread
/// populates it and no synchronization exists.
#[derive(Debug, Clone, Default)]
pub struct HoistingScope {
    variables: Vec<NodeId>,
    functions: Vec<NodeId>,
    classes: Vec<NodeId>,
}

/// The three ordered declaration lists of a closed scope, handed to the
/// scope-binding builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoistedDeclarations {
    /// `var`/`let`/`const` declarations, in source order.
    pub variables: Vec<NodeId>,
    /// `function` declarations, in source order.
    pub functions: Vec<NodeId>,
    /// `class` declarations, in source order.
    pub classes: Vec<NodeId>,
}

impl HoistingScope {
    /// Open a scope with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration to the collection matching its kind tag.
    ///
    /// O(1) amortized. The declaration node itself — identity, span,
    /// payload — is left untouched; this records, it does not copy or
    /// validate. Feeding a non-declaration node is a parser bug (the kinds
    /// are debug-asserted), not a recoverable condition.
    pub fn add(&mut self, arena: &AstArena<'_>, declaration: NodeId) {
        match arena.node_type(declaration) {
            NodeType::VariableDeclaration => self.variables.push(declaration),
            NodeType::FunctionDeclaration => self.functions.push(declaration),
            NodeType::ClassDeclaration => self.classes.push(declaration),
            other => debug_assert!(false, "hoisted a non-declaration node: {other}"),
        }
    }

    /// Variable declarations recorded so far, in insertion order.
    pub fn variables(&self) -> &[NodeId] {
        &self.variables
    }

    /// Function declarations recorded so far, in insertion order.
    pub fn functions(&self) -> &[NodeId] {
        &self.functions
    }

    /// Class declarations recorded so far, in insertion order.
    pub fn classes(&self) -> &[NodeId] {
        &self.classes
    }

    /// Returns `true` when no declarations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.functions.is_empty() && self.classes.is_empty()
    }

    /// Close the scope, yielding its declaration lists.
    ///
    /// Consumes `self`: the write-then-read-once lifecycle is enforced by
    /// move semantics — a closed scope cannot be appended to or read again.
    pub fn close(self) -> HoistedDeclarations {
        HoistedDeclarations {
            variables: self.variables,
            functions: self.functions,
            classes: self.classes,
        }
    }
}
