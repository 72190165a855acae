//! Literal nodes and literal typing.
//!
//! A [`Literal`] is a tagged union over the five ECMAScript literal kinds.
//! Whatever the kind, it retains the **raw span** — the exact source
//! characters the scanner consumed, quotes and escape sequences included —
//! independent of any value normalization, so external pretty-printers can
//! reproduce the source byte-for-byte.

use ecma_lexical::Span;
use regex::Regex;

/// The five literal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Boolean,
    Numeric,
    Null,
    RegExp,
}

/// A literal expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<'s> {
    kind: LiteralKind,
    /// Cooked string value (escapes resolved by the scanner). `String` kind
    /// only.
    string_value: Option<String>,
    /// Always populated for `Boolean` (exactly 1.0 / 0.0) and `Numeric`
    /// kinds; 0.0 otherwise.
    numeric_value: f64,
    /// Pattern, flags, and best-effort compiled form. `RegExp` kind only.
    regex: Option<RegexValue>,
    /// Verbatim source text of the literal.
    raw: Span<'s>,
}

impl<'s> Literal<'s> {
    /// A string literal. `value` is the cooked text; `raw` keeps the quoted,
    /// escaped original.
    pub fn string(value: impl Into<String>, raw: Span<'s>) -> Self {
        Literal {
            kind: LiteralKind::String,
            string_value: Some(value.into()),
            numeric_value: 0.0,
            regex: None,
            raw,
        }
    }

    /// A boolean literal. The numeric value is exactly 1 for `true` and 0
    /// for `false`.
    pub fn boolean(value: bool, raw: Span<'s>) -> Self {
        Literal {
            kind: LiteralKind::Boolean,
            string_value: None,
            numeric_value: if value { 1.0 } else { 0.0 },
            regex: None,
            raw,
        }
    }

    /// A numeric literal. `raw` keeps the exact digit sequence, whatever
    /// radix or notation the source used.
    pub fn numeric(value: f64, raw: Span<'s>) -> Self {
        Literal {
            kind: LiteralKind::Numeric,
            string_value: None,
            numeric_value: value,
            regex: None,
            raw,
        }
    }

    /// The `null` literal.
    pub fn null(raw: Span<'s>) -> Self {
        Literal {
            kind: LiteralKind::Null,
            string_value: None,
            numeric_value: 0.0,
            regex: None,
            raw,
        }
    }

    /// A regular-expression literal.
    ///
    /// Construction never fails: if the pattern or flags do not form a
    /// valid expression in the host engine, the compiled form is simply
    /// absent while the node, pattern text, and flags stay intact. Whether
    /// that should instead abort the parse is a question for later passes;
    /// this layer defers.
    pub fn regexp(pattern: impl Into<String>, flags: impl Into<String>, raw: Span<'s>) -> Self {
        Literal {
            kind: LiteralKind::RegExp,
            string_value: None,
            numeric_value: 0.0,
            regex: Some(RegexValue::new(pattern, flags)),
            raw,
        }
    }

    /// The literal kind tag.
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// The verbatim source text the scanner consumed for this literal.
    pub fn raw(&self) -> Span<'s> {
        self.raw
    }

    /// Cooked string value, for `String` literals.
    pub fn string_value(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    /// Numeric value: the number for `Numeric`, 1/0 for `Boolean`, 0
    /// otherwise.
    pub fn numeric_value(&self) -> f64 {
        self.numeric_value
    }

    /// Boolean value, derived from the tag and the numeric field.
    pub fn boolean_value(&self) -> bool {
        self.kind == LiteralKind::Boolean && self.numeric_value != 0.0
    }

    /// Pattern/flags/compiled-form, for `RegExp` literals.
    pub fn regex(&self) -> Option<&RegexValue> {
        self.regex.as_ref()
    }

    /// Returns `true` for `String` literals; directive recognition keys on
    /// this.
    pub fn is_string(&self) -> bool {
        self.kind == LiteralKind::String
    }
}

/// Pattern and flag text of a regular-expression literal, with a
/// best-effort compiled form.
#[derive(Debug, Clone)]
pub struct RegexValue {
    /// The source pattern text, between the slashes.
    pub pattern: String,
    /// The flag text after the closing slash.
    pub flags: String,
    compiled: Option<Regex>,
}

impl RegexValue {
    /// Record the pattern and flags, compiling in the host engine when
    /// possible.
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let flags = flags.into();
        let compiled = compile(&pattern, &flags);
        RegexValue {
            pattern,
            flags,
            compiled,
        }
    }

    /// The compiled form, absent when the pattern or flags are not
    /// expressible in the host engine.
    pub fn compiled(&self) -> Option<&Regex> {
        self.compiled.as_ref()
    }
}

/// Pattern/flag text is the node's identity; the compiled form is derived.
impl PartialEq for RegexValue {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

/// Best-effort translation into the host engine.
///
/// Flags must come from the ECMAScript set `dgimsuvy` with no repeats and
/// at most one of `u`/`v`. Of those, `i`, `m`, and `s` have host inline
/// equivalents; `g`, `y`, and `d` only affect match iteration, not pattern
/// semantics, and `u`/`v` are the engine's default text model. An
/// inexpressible pattern or flag set yields `None` — never an error.
fn compile(pattern: &str, flags: &str) -> Option<Regex> {
    let mut inline = String::new();
    let mut seen = [false; 8];
    for flag in flags.chars() {
        let slot = "dgimsuvy".find(flag)?;
        if seen[slot] {
            return None;
        }
        seen[slot] = true;
        if matches!(flag, 'i' | 'm' | 's') {
            inline.push(flag);
        }
    }
    // `u` and `v` are mutually exclusive.
    if seen[5] && seen[6] {
        return None;
    }
    let translated = if inline.is_empty() {
        pattern.to_owned()
    } else {
        format!("(?{inline}){pattern}")
    };
    Regex::new(&translated).ok()
}
