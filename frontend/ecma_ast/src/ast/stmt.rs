//! Statement, declaration, and program composites.
//!
//! Composites reference children by [`NodeId`] into the arena. The one
//! composite with extra structure is [`Directive`]: an expression-statement
//! shape plus a second raw span covering the whole statement, because
//! directive-prologue detection compares statement-level raw text, not the
//! literal's own raw text.

use ecma_lexical::Span;

use crate::{AstArena, NodeId};

/// Whether the source file is a classic script or an ES module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    /// A classic script — top-level `import`/`export` are not allowed.
    #[default]
    Script,
    /// An ES module.
    Module,
}

/// The root node of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Script or module.
    pub source_type: SourceType,
    /// Top-level statements, in source order.
    pub body: Vec<NodeId>,
}

/// Expression statement: `expr ;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The wrapped expression.
    pub expression: NodeId,
}

/// A directive-prologue statement such as `"use strict";`.
///
/// Built by composition: the expression-statement shape plus the raw span
/// of the **entire statement**. The expression is guaranteed to reference a
/// String [`Literal`](crate::Literal) — [`Directive::recognize`] is the
/// only constructor and refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'s> {
    expression: NodeId,
    directive: Span<'s>,
}

impl<'s> Directive<'s> {
    /// Promote an expression statement to a directive.
    ///
    /// Yields `Some` iff the statement's expression is a String literal;
    /// `statement_raw` must cover the whole statement, semicolon included
    /// when present.
    pub fn recognize(
        arena: &AstArena<'s>,
        stmt: &ExpressionStatement,
        statement_raw: Span<'s>,
    ) -> Option<Directive<'s>> {
        let is_string = arena
            .kind(stmt.expression)
            .as_literal()
            .is_some_and(super::Literal::is_string);
        is_string.then_some(Directive {
            expression: stmt.expression,
            directive: statement_raw,
        })
    }

    /// The String literal expression.
    pub fn expression(&self) -> NodeId {
        self.expression
    }

    /// Raw span of the entire statement — distinct from the literal's own
    /// raw span.
    pub fn statement_raw(&self) -> Span<'s> {
        self.directive
    }

    /// The quoted content of the directive, extracted from the
    /// statement-level raw text: surrounding whitespace and a trailing
    /// semicolon are ignored, the quotes are stripped, and escape sequences
    /// are deliberately **not** cooked — a pragma spelled with escapes is a
    /// different pragma.
    pub fn pragma_text(&self) -> Option<&'s str> {
        let text = self.directive.as_str().trim();
        let text = text.strip_suffix(';').unwrap_or(text).trim_end();
        let inner = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))?;
        Some(inner)
    }

    /// Returns `true` for the strict-mode marker, matched on raw quoted
    /// content per the directive-prologue rules.
    pub fn is_strict_mode_marker(&self) -> bool {
        self.pragma_text() == Some("use strict")
    }
}

/// `{ statements }` block statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements in the block, in source order.
    pub body: Vec<NodeId>,
}

/// `var` / `let` / `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    /// The source keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

/// `var / let / const` declaration statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// The declaring keyword.
    pub kind: VarKind,
    /// One or more declarators, in source order.
    pub declarators: Vec<NodeId>,
}

/// A single `name = init` slot of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDeclarator {
    /// The bound identifier.
    pub ident: NodeId,
    /// Initializer expression, if present.
    pub init: Option<NodeId>,
}

/// `function` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// The function name; an elided identifier for a default export's
    /// anonymous function.
    pub ident: NodeId,
    /// Formal parameters, in source order.
    pub params: Vec<NodeId>,
    /// The body block statement.
    pub body: NodeId,
    /// `async function`.
    pub is_async: bool,
    /// `function*`.
    pub is_generator: bool,
}

/// `class` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// The class name.
    pub ident: NodeId,
    /// `extends` clause expression, if present.
    pub superclass: Option<NodeId>,
    /// The class body block.
    pub body: NodeId,
}

/// `label: body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledStatement {
    /// The labeling identifier.
    pub label: NodeId,
    /// The labeled statement.
    pub body: NodeId,
}
