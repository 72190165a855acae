//! AST node definitions.
//!
//! [`NodeKind`] is the closed payload enum; [`NodeType`] is its fieldless
//! kind tag. Composites reference their children by
//! [`NodeId`](crate::NodeId) into the [`AstArena`](crate::AstArena), so the
//! whole tree is a handful of contiguous arrays.
//!
//! # Module structure
//!
//! - `expr`: leaf expression nodes ([`Identifier`])
//! - `literal`: [`Literal`] and its five kinds, plus [`RegexValue`]
//! - `stmt`: statement and declaration composites, [`Directive`], [`Program`]

mod expr;
mod literal;
mod stmt;

pub use expr::Identifier;
pub use literal::{Literal, LiteralKind, RegexValue};
pub use stmt::{
    BlockStatement, ClassDeclaration, Directive, ExpressionStatement, FunctionDeclaration,
    LabeledStatement, Program, SourceType, VarKind, VariableDeclaration, VariableDeclarator,
};

use std::fmt;

use smallvec::SmallVec;

use crate::NodeId;

/// The closed set of node kind tags.
///
/// Downstream passes dispatch on this tag; it never grows behind a feature
/// flag, and no node carries a kind outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Identifier,
    Literal,
    Program,
    ExpressionStatement,
    Directive,
    BlockStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ClassDeclaration,
    LabeledStatement,
    EmptyStatement,
}

impl NodeType {
    /// The ESTree-style type name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Identifier => "Identifier",
            NodeType::Literal => "Literal",
            NodeType::Program => "Program",
            NodeType::ExpressionStatement => "ExpressionStatement",
            NodeType::Directive => "Directive",
            NodeType::BlockStatement => "BlockStatement",
            NodeType::VariableDeclaration => "VariableDeclaration",
            NodeType::VariableDeclarator => "VariableDeclarator",
            NodeType::FunctionDeclaration => "FunctionDeclaration",
            NodeType::ClassDeclaration => "ClassDeclaration",
            NodeType::LabeledStatement => "LabeledStatement",
            NodeType::EmptyStatement => "EmptyStatement",
        }
    }

    /// Returns `true` for statement nodes (including declarations and
    /// directives, which occupy statement positions).
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeType::ExpressionStatement
                | NodeType::Directive
                | NodeType::BlockStatement
                | NodeType::VariableDeclaration
                | NodeType::FunctionDeclaration
                | NodeType::ClassDeclaration
                | NodeType::LabeledStatement
                | NodeType::EmptyStatement
        )
    }

    /// Returns `true` for expression nodes.
    pub fn is_expression(self) -> bool {
        matches!(self, NodeType::Identifier | NodeType::Literal)
    }

    /// Returns `true` for the declaration kinds a
    /// [`HoistingScope`](crate::HoistingScope) collects.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeType::VariableDeclaration
                | NodeType::FunctionDeclaration
                | NodeType::ClassDeclaration
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node's payload. Leaves carry spans; composites carry child ids.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'s> {
    Identifier(Identifier<'s>),
    Literal(Literal<'s>),
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    Directive(Directive<'s>),
    BlockStatement(BlockStatement),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    LabeledStatement(LabeledStatement),
    EmptyStatement,
}

impl<'s> NodeKind<'s> {
    /// The closed kind tag for this payload.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Identifier(_) => NodeType::Identifier,
            NodeKind::Literal(_) => NodeType::Literal,
            NodeKind::Program(_) => NodeType::Program,
            NodeKind::ExpressionStatement(_) => NodeType::ExpressionStatement,
            NodeKind::Directive(_) => NodeType::Directive,
            NodeKind::BlockStatement(_) => NodeType::BlockStatement,
            NodeKind::VariableDeclaration(_) => NodeType::VariableDeclaration,
            NodeKind::VariableDeclarator(_) => NodeType::VariableDeclarator,
            NodeKind::FunctionDeclaration(_) => NodeType::FunctionDeclaration,
            NodeKind::ClassDeclaration(_) => NodeType::ClassDeclaration,
            NodeKind::LabeledStatement(_) => NodeType::LabeledStatement,
            NodeKind::EmptyStatement => NodeType::EmptyStatement,
        }
    }

    /// Direct children, in source order. Empty for leaves.
    ///
    /// Every call re-derives the same sequence, so enumeration is
    /// deterministic and restartable. The inline capacity covers every
    /// fixed-arity composite; only statement bodies and long parameter
    /// lists spill.
    pub fn children(&self) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        match self {
            NodeKind::Identifier(_) | NodeKind::Literal(_) | NodeKind::EmptyStatement => {}
            NodeKind::Program(program) => out.extend_from_slice(&program.body),
            NodeKind::ExpressionStatement(stmt) => out.push(stmt.expression),
            NodeKind::Directive(directive) => out.push(directive.expression()),
            NodeKind::BlockStatement(block) => out.extend_from_slice(&block.body),
            NodeKind::VariableDeclaration(decl) => out.extend_from_slice(&decl.declarators),
            NodeKind::VariableDeclarator(declarator) => {
                out.push(declarator.ident);
                if let Some(init) = declarator.init {
                    out.push(init);
                }
            }
            NodeKind::FunctionDeclaration(func) => {
                out.push(func.ident);
                out.extend_from_slice(&func.params);
                out.push(func.body);
            }
            NodeKind::ClassDeclaration(class) => {
                out.push(class.ident);
                if let Some(superclass) = class.superclass {
                    out.push(superclass);
                }
                out.push(class.body);
            }
            NodeKind::LabeledStatement(labeled) => {
                out.push(labeled.label);
                out.push(labeled.body);
            }
        }
        out
    }

    /// The literal payload, if this is a [`NodeType::Literal`] node.
    pub fn as_literal(&self) -> Option<&Literal<'s>> {
        match self {
            NodeKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// The identifier payload, if this is a [`NodeType::Identifier`] node.
    pub fn as_identifier(&self) -> Option<&Identifier<'s>> {
        match self {
            NodeKind::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// The directive payload, if this is a [`NodeType::Directive`] node.
    pub fn as_directive(&self) -> Option<&Directive<'s>> {
        match self {
            NodeKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Span;

    use super::*;

    #[test]
    fn leaves_have_no_children() {
        let ident = NodeKind::Identifier(Identifier::new(Some(Span::of("x"))));
        assert!(ident.children().is_empty());
        assert_eq!(ident.node_type(), NodeType::Identifier);
        assert!(NodeKind::EmptyStatement.children().is_empty());
    }

    #[test]
    fn child_enumeration_is_stable_across_calls() {
        let declarator = NodeKind::VariableDeclarator(VariableDeclarator {
            ident: crate::NodeId::new(0),
            init: Some(crate::NodeId::new(1)),
        });
        let first = declarator.children();
        let second = declarator.children();
        assert_eq!(first.as_slice(), second.as_slice());
        assert_eq!(
            first.as_slice(),
            &[crate::NodeId::new(0), crate::NodeId::new(1)]
        );
    }

    #[test]
    fn function_children_are_in_source_order() {
        let func = NodeKind::FunctionDeclaration(FunctionDeclaration {
            ident: crate::NodeId::new(2),
            params: vec![crate::NodeId::new(3), crate::NodeId::new(4)],
            body: crate::NodeId::new(5),
            is_async: false,
            is_generator: false,
        });
        let ids: Vec<u32> = func.children().iter().map(|id| id.raw()).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn type_classifiers() {
        assert!(NodeType::Identifier.is_expression());
        assert!(!NodeType::Identifier.is_statement());
        assert!(NodeType::Directive.is_statement());
        assert!(NodeType::VariableDeclaration.is_declaration());
        assert!(NodeType::FunctionDeclaration.is_declaration());
        assert!(NodeType::ClassDeclaration.is_declaration());
        assert!(!NodeType::ExpressionStatement.is_declaration());
        assert!(!NodeType::Program.is_statement());
        assert_eq!(NodeType::BlockStatement.to_string(), "BlockStatement");
    }
}
