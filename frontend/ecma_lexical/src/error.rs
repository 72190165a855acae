//! Span contract-violation errors.

use thiserror::Error;

/// A violation of the span layer's caller contract.
///
/// Both variants indicate a bug in the calling scanner or parser — an
/// attempt to address text that the backing buffer does not contain. They
/// abort the current operation and are not meant to reach end users;
/// anomalies in the *source text itself* (bad escapes, invalid regex
/// patterns) are never reported through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Sub-span construction with bounds outside the parent, or with a cut
    /// that does not land on a UTF-8 character boundary, or from a span
    /// with no backing buffer.
    #[error("invalid slice: offset {offset} + length {length} does not address text in a buffer of {buffer_len} bytes")]
    InvalidSlice {
        /// Requested offset, relative to the parent span.
        offset: u32,
        /// Requested length in bytes.
        length: u32,
        /// Length of the parent span (0 for a detached parent).
        buffer_len: u32,
    },

    /// Indexed character access outside the span's bounds.
    #[error("index {index} out of range for span of length {length}")]
    IndexOutOfRange {
        /// Requested index, relative to the span start.
        index: u32,
        /// Length of the span in bytes.
        length: u32,
    },
}
