//! The zero-copy lexical span type.
//!
//! A [`Span`] is a `(buffer, offset, length)` triple addressing a byte range
//! of UTF-8 source text. It is `Copy`, immutable after construction, and
//! never allocates: materializing its value re-borrows the backing buffer.
//!
//! Two spans are equal when they address the same **content**, regardless of
//! which buffer backs them, and [`Span::content_hash`] agrees with that
//! equality. A *detached* span (no backing buffer, the [`Default`] value) is
//! distinct from an empty span over a real buffer and orders before every
//! attached span.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::SpanError;

/// Multiplier combining the two hash accumulators.
const HASH_COMBINE: u32 = 1_566_083_941;

/// Comparison mode for [`Span::eq_with`] and [`Span::cmp_with`].
///
/// Case-insensitive lookups (HTML-ish attribute matching, pragma scanning)
/// use a parameterized mode rather than a separate span type, so the same
/// value participates in both kinds of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Byte-for-byte ordinal comparison. The default everywhere.
    #[default]
    Ordinal,
    /// Ordinal comparison that folds ASCII letters. Non-ASCII characters
    /// still compare byte-for-byte; this layer only ever matches ASCII
    /// keywords and pragmas insensitively.
    IgnoreAsciiCase,
}

/// Zero-copy view into a backing source buffer.
///
/// # Invariants
///
/// `offset + length` never exceeds the buffer length, and both cut points
/// lie on UTF-8 character boundaries. The constructors enforce this; a
/// violation is surfaced as [`SpanError::InvalidSlice`] and means the
/// calling scanner is buggy.
///
/// # Lifetime
///
/// The backing buffer must outlive every span derived from it. That is the
/// central resource invariant of the front end, and it is enforced
/// statically by the `'a` borrow — a buffer cannot move or be freed while
/// any span still references it.
#[derive(Clone, Copy)]
pub struct Span<'a> {
    source: Option<&'a str>,
    offset: u32,
    length: u32,
}

impl<'a> Span<'a> {
    /// The process-wide empty span: attached to the empty buffer, length 0.
    ///
    /// Distinct from the detached [`Default`] span.
    pub const EMPTY: Span<'static> = Span {
        source: Some(""),
        offset: 0,
        length: 0,
    };

    /// Create a span covering an entire source buffer. Zero cost.
    ///
    /// Buffers larger than `u32::MAX` bytes (~4 GiB) saturate the length;
    /// the driver rejects oversized files before scanning starts.
    pub fn of(source: &'a str) -> Span<'a> {
        Span {
            source: Some(source),
            offset: 0,
            length: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// Construct a sub-span of `self` at `offset` (relative to this span)
    /// extending `length` bytes, over the same buffer. Non-allocating.
    ///
    /// Fails with [`SpanError::InvalidSlice`] when `self` is detached, the
    /// bounds fall outside `self`, or either cut point lands inside a
    /// multi-byte UTF-8 sequence. All three are scanner bugs, not source
    /// errors.
    pub fn slice(&self, offset: u32, length: u32) -> Result<Span<'a>, SpanError> {
        let invalid = SpanError::InvalidSlice {
            offset,
            length,
            buffer_len: self.length,
        };
        let Some(source) = self.source else {
            return Err(invalid);
        };
        // Unsigned arithmetic: checking `length` against the remainder also
        // rules out `offset + length` overflow.
        if offset > self.length || length > self.length - offset {
            return Err(invalid);
        }
        let start = (self.offset + offset) as usize;
        let end = start + length as usize;
        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(invalid);
        }
        Ok(Span {
            source: Some(source),
            offset: self.offset + offset,
            length,
        })
    }

    /// The suffix of this span starting at `index`, over the same buffer.
    pub fn substring(&self, index: u32) -> Result<Span<'a>, SpanError> {
        if index > self.length {
            return Err(SpanError::InvalidSlice {
                offset: index,
                length: 0,
                buffer_len: self.length,
            });
        }
        self.slice(index, self.length - index)
    }

    /// Materialize the addressed content, or `None` for a detached span.
    ///
    /// This is a re-borrow of the backing buffer — never a copy. A span
    /// covering the whole buffer yields the buffer itself.
    pub fn value(&self) -> Option<&'a str> {
        let source = self.source?;
        let start = self.offset as usize;
        Some(&source[start..start + self.length as usize])
    }

    /// The addressed content, with `""` for a detached span.
    pub fn as_str(&self) -> &'a str {
        self.value().unwrap_or("")
    }

    /// O(1) bounds-checked read of the byte at `index`.
    ///
    /// Fails with [`SpanError::IndexOutOfRange`] outside the span, including
    /// any access through a detached span.
    pub fn byte_at(&self, index: u32) -> Result<u8, SpanError> {
        match self.source {
            Some(source) if index < self.length => {
                Ok(source.as_bytes()[(self.offset + index) as usize])
            }
            _ => Err(SpanError::IndexOutOfRange {
                index,
                length: self.length,
            }),
        }
    }

    /// Non-failing read for scanner loops: out-of-range yields `0x00`,
    /// so EOF tests fold into the sentinel comparison the scanner already
    /// performs.
    pub fn byte_or_nul(&self, index: u32) -> u8 {
        self.byte_at(index).unwrap_or(0)
    }

    /// Restartable iteration over the characters of the span, reading
    /// directly from buffer positions. Each call starts a fresh pass.
    pub fn chars(&self) -> std::str::Chars<'a> {
        self.as_str().chars()
    }

    /// Restartable iteration over the bytes of the span.
    pub fn bytes(&self) -> std::str::Bytes<'a> {
        self.as_str().bytes()
    }

    /// Length of the addressed content in bytes.
    pub fn len(&self) -> u32 {
        self.length
    }

    /// Returns `true` when the span addresses no bytes.
    ///
    /// True for both the empty span and a detached span; use
    /// [`Span::is_detached`] to tell them apart.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` for a span with no backing buffer (the [`Default`]
    /// value). Detached spans order before all attached spans and equal
    /// only each other.
    pub fn is_detached(&self) -> bool {
        self.source.is_none()
    }

    /// Byte offset of this span within its backing buffer.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns `true` when the span is detached or addresses only
    /// whitespace.
    pub fn is_whitespace_or_detached(&self) -> bool {
        self.source.is_none() || self.as_str().trim_start().is_empty()
    }

    /// Concatenate two spans' contents into a fresh allocation.
    ///
    /// Only used on diagnostic and identifier-synthesis paths; the scan
    /// path never calls this.
    pub fn concat(&self, other: &Span<'_>) -> String {
        let mut out = String::with_capacity(self.length as usize + other.length as usize);
        out.push_str(self.as_str());
        out.push_str(other.as_str());
        out
    }

    /// ASCII-lowercased copy of the content. Allocating; comparison paths
    /// should prefer [`Comparison::IgnoreAsciiCase`].
    pub fn to_ascii_lowercase(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    /// Content equality under an explicit comparison mode.
    pub fn eq_with(&self, other: &Span<'_>, mode: Comparison) -> bool {
        self.length == other.length && self.cmp_with(other, mode) == Ordering::Equal
    }

    /// Total content ordering under an explicit comparison mode.
    ///
    /// A detached span orders before every attached span (and equal to
    /// another detached span); otherwise the order is lexicographic ordinal
    /// over the addressed bytes, which for UTF-8 coincides with Unicode
    /// scalar order.
    pub fn cmp_with(&self, other: &Span<'_>, mode: Comparison) -> Ordering {
        match (self.source, other.source) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(_), Some(_)) => match mode {
                Comparison::Ordinal => self.as_str().as_bytes().cmp(other.as_str().as_bytes()),
                Comparison::IgnoreAsciiCase => {
                    let lhs = self.bytes().map(|b| b.to_ascii_lowercase());
                    let rhs = other.bytes().map(|b| b.to_ascii_lowercase());
                    lhs.cmp(rhs)
                }
            },
        }
    }

    /// Deterministic content hash, stable across buffers, processes, and
    /// reimplementations.
    ///
    /// Two accumulators seeded with 5381 walk the bytes in interleave —
    /// even bytes into the first, odd bytes into the second, two bytes per
    /// iteration — each step computing `acc = acc * 33 ^ byte` (written
    /// `(acc << 5) + acc` below), and combine as `h1 + h2 * 1566083941`,
    /// all in wrapping 32-bit arithmetic. Empty and detached spans hash to
    /// the fixed constant 0.
    ///
    /// Downstream hash-keyed structures persist these values; do not
    /// change the algorithm.
    pub fn content_hash(&self) -> u32 {
        let bytes = match self.source {
            Some(_) if self.length > 0 => self.as_str().as_bytes(),
            _ => return 0,
        };
        let mut h1: u32 = 5381;
        let mut h2: u32 = 5381;
        let mut i = 0;
        while i < bytes.len() {
            h1 = ((h1 << 5).wrapping_add(h1)) ^ u32::from(bytes[i]);
            if i + 1 == bytes.len() {
                break;
            }
            h2 = ((h2 << 5).wrapping_add(h2)) ^ u32::from(bytes[i + 1]);
            i += 2;
        }
        h1.wrapping_add(h2.wrapping_mul(HASH_COMBINE))
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, Comparison::Ordinal)
    }
}

impl Eq for Span<'_> {}

impl PartialEq<str> for Span<'_> {
    /// A span equals a `str` when it is attached and addresses identical
    /// content. A detached span equals no `str`, not even the empty one.
    fn eq(&self, other: &str) -> bool {
        self.value() == Some(other)
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value() == Some(*other)
    }
}

impl PartialOrd for Span<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_with(other, Comparison::Ordinal)
    }
}

impl Hash for Span<'_> {
    /// Feeds [`Span::content_hash`], so the `HashMap` hash agrees with
    /// content equality across distinct backing buffers.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.content_hash());
    }
}

impl Default for Span<'_> {
    /// The detached span: no backing buffer. Distinct from [`Span::EMPTY`].
    fn default() -> Self {
        Span {
            source: None,
            offset: 0,
            length: 0,
        }
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_detached() {
            write!(f, "Span(<detached>)")
        } else {
            write!(
                f,
                "Span({:?} @ {}..{})",
                self.as_str(),
                self.offset,
                self.offset + self.length
            )
        }
    }
}

// Spans ride in every token and node; keep them at two words + discriminant.
const _: () = assert!(std::mem::size_of::<Span<'_>>() <= 24);
