//! Statement side tables.
//!
//! The original front-end design hung two mutable fields off every
//! statement: the label-set back-reference (which labels name this
//! statement, for `break`/`continue` resolution) and a list of
//! hoisting-scope tags attached by a later pass. Embedding mutable
//! back-references in an otherwise-immutable tree invites cycles, so both
//! relations live here instead, keyed by the statement's [`NodeId`]. The
//! tree stays structurally immutable after construction.

use ecma_lexical::Span;
use rustc_hash::FxHashMap;

use crate::NodeId;

/// Side tables for statement-level relations.
///
/// Populated by the parser (label sets) and by later passes (hoisting
/// tags); absent entries are the common case and cost nothing.
#[derive(Debug, Clone, Default)]
pub struct StatementTables<'s> {
    label_sets: FxHashMap<NodeId, Span<'s>>,
    hoisting_tags: FxHashMap<NodeId, Vec<String>>,
}

impl<'s> StatementTables<'s> {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the labeling identifier's name span for a statement.
    ///
    /// The span is a non-owning view into the source — a lookup relation,
    /// not a second copy of the identifier node.
    pub fn set_label_set(&mut self, stmt: NodeId, label: Span<'s>) {
        self.label_sets.insert(stmt, label);
    }

    /// The labeling identifier's name span, if the statement is labeled.
    pub fn label_set(&self, stmt: NodeId) -> Option<Span<'s>> {
        self.label_sets.get(&stmt).copied()
    }

    /// Append a hoisting-scope tag to a statement, preserving insertion
    /// order.
    pub fn add_hoisting_tag(&mut self, stmt: NodeId, tag: impl Into<String>) {
        self.hoisting_tags.entry(stmt).or_default().push(tag.into());
    }

    /// The statement's hoisting-scope tags, in insertion order. Empty when
    /// none were attached.
    pub fn hoisting_tags(&self, stmt: NodeId) -> &[String] {
        self.hoisting_tags.get(&stmt).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn label_set_is_a_lookup_relation() {
        let source = Span::of("outer: while (x) break outer;");
        let label = source.slice(0, 5).unwrap_or_default();
        let stmt = NodeId::new(4);

        let mut tables = StatementTables::new();
        assert_eq!(tables.label_set(stmt), None);
        tables.set_label_set(stmt, label);
        assert_eq!(tables.label_set(stmt).map(|s| s.as_str()), Some("outer"));
        assert_eq!(tables.label_set(NodeId::new(5)), None);
    }

    #[test]
    fn hoisting_tags_keep_insertion_order() {
        let stmt = NodeId::new(0);
        let mut tables = StatementTables::new();
        assert!(tables.hoisting_tags(stmt).is_empty());

        tables.add_hoisting_tag(stmt, "fn:outer");
        tables.add_hoisting_tag(stmt, "fn:inner");
        tables.add_hoisting_tag(stmt, "fn:outer");
        assert_eq!(
            tables.hoisting_tags(stmt),
            &["fn:outer", "fn:inner", "fn:outer"]
        );
        assert!(tables.hoisting_tags(NodeId::new(9)).is_empty());
    }
}
