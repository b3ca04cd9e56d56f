//! # Reply Errors
//!
//! Purpose: One error type for every way a coercion can fail, with the nil
//! marker kept as a distinguished variant callers can match on.
//!
//! ## Design Principles
//! 1. **Sentinel as Variant**: "reply was nil" is `ReplyError::Nil`, compared
//!    structurally instead of by identity.
//! 2. **Verbatim Server Errors**: An embedded error reply displays exactly the
//!    server's message, with no prefix.
//! 3. **Self-Describing Failures**: Local failures carry the operation name and
//!    the offending reply kind or input text.

use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

use thiserror::Error;

use crate::value::ReplyKind;

/// Result type for reply coercions.
pub type ReplyResult<T> = Result<T, ReplyError>;

/// Errors surfaced by reply coercions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplyError {
    /// Reply was the nil marker.
    #[error("nil returned")]
    Nil,
    /// Reply was an error reply; holds the server message.
    #[error("{0}")]
    Server(String),
    /// Reply variant cannot be converted to the requested type.
    #[error("unexpected type for {op}, got type {kind}")]
    UnexpectedType { op: &'static str, kind: ReplyKind },
    /// An array element cannot be converted to the requested element type.
    #[error("unexpected element type for {op}, got type {kind}")]
    UnexpectedElementType { op: &'static str, kind: ReplyKind },
    /// Signed value does not fit the target width.
    #[error("value {value} out of range for {op}")]
    OutOfRange { op: &'static str, value: i64 },
    /// Negative value requested as unsigned.
    #[error("unexpected negative value {value} for {op}")]
    Negative { op: &'static str, value: i64 },
    /// Text is not a base-10 integer of the requested width.
    #[error("{op}: invalid integer {input:?}: {source}")]
    ParseInt {
        op: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// Text is not a floating point literal.
    #[error("{op}: invalid float {input:?}: {source}")]
    ParseFloat {
        op: &'static str,
        input: String,
        #[source]
        source: ParseFloatError,
    },
    /// Text is not a boolean literal.
    #[error("{op}: invalid boolean {input:?}")]
    ParseBool { op: &'static str, input: String },
    /// Bulk bytes are not valid UTF-8 (strict decoding only).
    #[error("{op}: invalid utf-8: {source}")]
    Utf8 {
        op: &'static str,
        #[source]
        source: Utf8Error,
    },
    /// Key/value array has an unpaired trailing element.
    #[error("{op} expects an even number of values, got {len}")]
    OddLength { op: &'static str, len: usize },
}

impl ReplyError {
    /// Returns true when the reply was the nil marker.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, ReplyError::Nil)
    }

    /// Returns the server message for embedded error replies.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ReplyError::Server(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn unexpected(op: &'static str, kind: ReplyKind) -> Self {
        tracing::trace!(op, %kind, "unexpected reply type");
        ReplyError::UnexpectedType { op, kind }
    }

    pub(crate) fn unexpected_element(op: &'static str, kind: ReplyKind) -> Self {
        tracing::trace!(op, %kind, "unexpected array element type");
        ReplyError::UnexpectedElementType { op, kind }
    }

    pub(crate) fn out_of_range(op: &'static str, value: i64) -> Self {
        tracing::trace!(op, value, "integer out of range");
        ReplyError::OutOfRange { op, value }
    }

    pub(crate) fn negative(op: &'static str, value: i64) -> Self {
        tracing::trace!(op, value, "negative value for unsigned target");
        ReplyError::Negative { op, value }
    }

    pub(crate) fn parse_int(op: &'static str, input: &str, source: ParseIntError) -> Self {
        tracing::trace!(op, input, "integer parse failed");
        ReplyError::ParseInt {
            op,
            input: input.to_string(),
            source,
        }
    }

    pub(crate) fn parse_float(op: &'static str, input: &str, source: ParseFloatError) -> Self {
        tracing::trace!(op, input, "float parse failed");
        ReplyError::ParseFloat {
            op,
            input: input.to_string(),
            source,
        }
    }

    pub(crate) fn parse_bool(op: &'static str, input: &str) -> Self {
        tracing::trace!(op, input, "boolean parse failed");
        ReplyError::ParseBool {
            op,
            input: input.to_string(),
        }
    }

    pub(crate) fn utf8(op: &'static str, source: Utf8Error) -> Self {
        tracing::trace!(op, valid_up_to = source.valid_up_to(), "utf-8 decode failed");
        ReplyError::Utf8 { op, source }
    }
}
