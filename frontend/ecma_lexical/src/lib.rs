//! Zero-copy lexical spans over ECMAScript source text.
//!
//! This crate is the bottom layer of the parser front end: every token the
//! scanner produces and every node the parser builds is backed by a [`Span`],
//! an immutable, allocation-free view into the source buffer. Spans compare
//! and hash by **content**, not by buffer identity, so two spans addressing
//! the same characters in different buffers are interchangeable as map keys.
//!
//! # Design
//!
//! - **Zero-copy**: materializing a span re-borrows the backing buffer;
//!   nothing on the scan path allocates.
//! - **Lifetime-checked**: the `'a` parameter ties every span to its source
//!   buffer, so the buffer statically outlives all derived spans.
//! - **Stable hashing**: [`Span::content_hash`] is a documented two-accumulator
//!   algorithm reproducible bit-for-bit by other implementations; downstream
//!   hash-keyed structures depend on its exact values.
//!
//! # Errors
//!
//! The two error kinds in [`SpanError`] signal contract violations in the
//! calling scanner or parser, never problems with user source. Malformed
//! user input is represented, not rejected, at this layer.

mod error;
mod span;

pub use error::SpanError;
pub use span::{Comparison, Span};
