//! AST node model for the ECMAScript front end.
//!
//! This crate contains the data structures the parser builds and every
//! later pass consumes:
//!
//! - [`AstArena`] — flat node storage; nodes are addressed by [`NodeId`]
//!   and released together when the arena is dropped.
//! - Node kinds ([`NodeKind`]/[`NodeType`]) — a closed discriminated set of
//!   literals, identifiers, statements, and declarations built from
//!   [`Span`] slices.
//! - [`HoistingScope`] — per-function/program accumulator of declarations,
//!   consumed once at scope exit by the scope-binding builder.
//! - [`StatementTables`] — side tables for label-set and hoisting-tag
//!   relations, keyed by [`NodeId`] instead of embedded back-references,
//!   keeping the tree structurally immutable after construction.
//!
//! # Lossless round-trip
//!
//! Every [`Literal`] and [`Directive`] keeps the **raw span** — the exact
//! characters the scanner consumed, escapes and quotes included — so
//! pretty-printers can re-emit source byte-for-byte.
//!
//! # Concurrency
//!
//! One parsing thread builds the arena; after construction everything here
//! is immutable and freely shared across read-only analysis passes. There
//! is no internal synchronization and none is needed.

mod arena;
pub mod ast;
mod hoisting;
mod node_id;
mod side_table;

pub use arena::AstArena;
pub use ast::{
    BlockStatement, ClassDeclaration, Directive, ExpressionStatement, FunctionDeclaration,
    Identifier, LabeledStatement, Literal, LiteralKind, NodeKind, NodeType, Program, RegexValue,
    SourceType, VarKind, VariableDeclaration, VariableDeclarator,
};
pub use hoisting::{HoistedDeclarations, HoistingScope};
pub use node_id::NodeId;
pub use side_table::StatementTables;

// Spans are this crate's currency; re-export the lexical layer's surface.
pub use ecma_lexical::{Comparison, Span, SpanError};
