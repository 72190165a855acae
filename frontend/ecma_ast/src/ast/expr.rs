//! Leaf expression nodes.

use crate::Span;

/// An identifier reference or binding name.
///
/// The name is optional: `None` models a grammatically permitted *elided*
/// binding slot (an array-pattern hole, an anonymous `export default`
/// function's name position). That is a different state from an identifier
/// whose text happens to be empty — a well-formed scanner never produces
/// the latter, but the type keeps the two apart rather than conflating
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'s> {
    name: Option<Span<'s>>,
}

impl<'s> Identifier<'s> {
    /// Wrap a name span, or `None` for an elided binding slot.
    pub fn new(name: Option<Span<'s>>) -> Self {
        Identifier { name }
    }

    /// An elided binding slot.
    pub fn elided() -> Self {
        Identifier { name: None }
    }

    /// The name span, if present.
    pub fn name(&self) -> Option<Span<'s>> {
        self.name
    }

    /// Returns `true` when this slot carries no identifier at all.
    pub fn is_elided(&self) -> bool {
        self.name.is_none()
    }
}
