//! # Reply Values
//!
//! Purpose: Model the decoded, loosely-typed reply handed over by the wire
//! decoder before any coercion takes place.
//!
//! ## Design Principles
//! 1. **Closed Variant Set**: Every reply is one of a fixed list of kinds, so
//!    each coercion matches exhaustively instead of probing at runtime.
//! 2. **Binary-Safe**: Bulk strings are kept as raw bytes (`Bytes`) and are
//!    only decoded when a caller asks for text.
//! 3. **Read-Only**: This layer never mutates a reply; coercions consume or
//!    borrow it and produce a fresh typed value.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Decoded reply value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    /// :123 responses.
    Integer(i64),
    /// 32-bit integers produced by narrower decoders.
    Integer32(i32),
    /// $... bulk strings.
    Bulk(Bytes),
    /// +OK or +PONG style responses.
    Simple(String),
    /// 64-bit floating point values.
    Double(f64),
    /// 32-bit floating point values.
    Float(f32),
    /// -ERR ... responses, message without the leading dash.
    Error(String),
    /// Null bulk strings and null arrays.
    Nil,
    /// *... arrays.
    Array(Vec<Reply>),
}

/// Tag naming a reply variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplyKind {
    Integer,
    Integer32,
    Bulk,
    Simple,
    Double,
    Float,
    Error,
    Nil,
    Array,
}

impl Reply {
    /// Returns the variant tag of this reply.
    pub fn kind(&self) -> ReplyKind {
        match self {
            Reply::Integer(_) => ReplyKind::Integer,
            Reply::Integer32(_) => ReplyKind::Integer32,
            Reply::Bulk(_) => ReplyKind::Bulk,
            Reply::Simple(_) => ReplyKind::Simple,
            Reply::Double(_) => ReplyKind::Double,
            Reply::Float(_) => ReplyKind::Float,
            Reply::Error(_) => ReplyKind::Error,
            Reply::Nil => ReplyKind::Nil,
            Reply::Array(_) => ReplyKind::Array,
        }
    }

    /// Returns true for the nil marker.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// Builds a bulk reply from anything byte-like.
    pub fn bulk(data: impl AsRef<[u8]>) -> Self {
        Reply::Bulk(Bytes::copy_from_slice(data.as_ref()))
    }

    /// Builds a simple string reply.
    pub fn simple(text: impl Into<String>) -> Self {
        Reply::Simple(text.into())
    }

    /// Builds an error reply carrying the server message.
    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }
}

impl From<i64> for Reply {
    fn from(value: i64) -> Self {
        Reply::Integer(value)
    }
}

impl From<i32> for Reply {
    fn from(value: i32) -> Self {
        Reply::Integer32(value)
    }
}

impl From<f64> for Reply {
    fn from(value: f64) -> Self {
        Reply::Double(value)
    }
}

impl From<f32> for Reply {
    fn from(value: f32) -> Self {
        Reply::Float(value)
    }
}

impl From<Bytes> for Reply {
    fn from(value: Bytes) -> Self {
        Reply::Bulk(value)
    }
}

impl From<Vec<u8>> for Reply {
    fn from(value: Vec<u8>) -> Self {
        Reply::Bulk(Bytes::from(value))
    }
}

impl From<&'static [u8]> for Reply {
    fn from(value: &'static [u8]) -> Self {
        Reply::Bulk(Bytes::from_static(value))
    }
}

impl From<Vec<Reply>> for Reply {
    fn from(value: Vec<Reply>) -> Self {
        Reply::Array(value)
    }
}

impl<T: Into<Reply>> From<Option<T>> for Reply {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reply::Nil, Into::into)
    }
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplyKind::Integer => "integer",
            ReplyKind::Integer32 => "int32",
            ReplyKind::Bulk => "bulk string",
            ReplyKind::Simple => "simple string",
            ReplyKind::Double => "double",
            ReplyKind::Float => "float",
            ReplyKind::Error => "error",
            ReplyKind::Nil => "nil",
            ReplyKind::Array => "array",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Reply::Integer(1).kind(), ReplyKind::Integer);
        assert_eq!(Reply::bulk("x").kind(), ReplyKind::Bulk);
        assert_eq!(Reply::simple("OK").kind(), ReplyKind::Simple);
        assert_eq!(Reply::Nil.kind(), ReplyKind::Nil);
        assert_eq!(Reply::Array(Vec::new()).kind(), ReplyKind::Array);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ReplyKind::Bulk.to_string(), "bulk string");
        assert_eq!(ReplyKind::Double.to_string(), "double");
    }

    #[test]
    fn option_maps_none_to_nil() {
        assert_eq!(Reply::from(None::<i64>), Reply::Nil);
        assert_eq!(Reply::from(Some(7i64)), Reply::Integer(7));
    }

    #[test]
    fn bulk_copies_bytes() {
        let reply = Reply::bulk(b"hello");
        assert_eq!(reply, Reply::Bulk(Bytes::from_static(b"hello")));
    }
}
