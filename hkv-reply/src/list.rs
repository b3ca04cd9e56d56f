//! # Array Coercions
//!
//! Purpose: Convert array replies into typed vectors and maps, sharing one
//! walker so the array/nil/error dispatch lives in a single place.
//!
//! ## Design Principles
//! 1. **Exact Allocation**: Output is sized to the array length up front.
//! 2. **Missing Is Not Malformed**: Nil elements become the element type's
//!    default; only incompatible elements fail.
//! 3. **All or Nothing**: The first element failure aborts the walk and the
//!    partially filled output is dropped.

use std::collections::HashMap;

use bytes::Bytes;

use crate::config::Utf8Mode;
use crate::error::{ReplyError, ReplyResult};
use crate::scalar::{decode_text, narrow, parse_float, parse_int, parse_uint, unsigned};
use crate::value::{Reply, ReplyKind};

/// Walks an array reply, converting each non-nil element with `convert`.
///
/// Nil elements are filled with `T::default()`. A non-array reply fails the
/// same way a scalar coercion would: nil with the sentinel, error replies
/// with the server message, anything else as an unexpected type for `op`.
pub fn collect_array<T, F>(reply: Reply, op: &'static str, mut convert: F) -> ReplyResult<Vec<T>>
where
    T: Default,
    F: FnMut(Reply) -> ReplyResult<T>,
{
    match reply {
        Reply::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                if item.is_nil() {
                    out.push(T::default());
                    continue;
                }
                out.push(convert(item)?);
            }
            Ok(out)
        }
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(op, other.kind())),
    }
}

/// Array of text; nil elements become empty strings.
pub(crate) fn strings(reply: Reply, mode: Utf8Mode) -> ReplyResult<Vec<String>> {
    const OP: &str = "Strings";
    collect_array(reply, OP, |item| text_element(OP, item, mode))
}

/// Array passed through untouched.
pub(crate) fn values(reply: Reply) -> ReplyResult<Vec<Reply>> {
    match reply {
        Reply::Array(items) => Ok(items),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected("Values", other.kind())),
    }
}

/// Array of raw bytes; nil elements stay `None`.
pub(crate) fn byte_slices(reply: Reply) -> ReplyResult<Vec<Option<Bytes>>> {
    const OP: &str = "ByteSlices";
    collect_array(reply, OP, |item| match item {
        Reply::Bulk(data) => Ok(Some(data)),
        Reply::Simple(text) => Ok(Some(Bytes::from(text.into_bytes()))),
        other => Err(ReplyError::unexpected_element(OP, other.kind())),
    })
}

pub(crate) fn ints(reply: Reply) -> ReplyResult<Vec<i32>> {
    const OP: &str = "Ints";
    collect_array(reply, OP, |item| match item {
        Reply::Integer(value) => narrow(OP, value),
        Reply::Bulk(data) => parse_int(OP, &data),
        other => Err(ReplyError::unexpected_element(OP, other.kind())),
    })
}

pub(crate) fn int64s(reply: Reply) -> ReplyResult<Vec<i64>> {
    const OP: &str = "Int64s";
    collect_array(reply, OP, |item| match item {
        Reply::Integer(value) => Ok(value),
        Reply::Bulk(data) => parse_int(OP, &data),
        other => Err(ReplyError::unexpected_element(OP, other.kind())),
    })
}

pub(crate) fn uint64s(reply: Reply) -> ReplyResult<Vec<u64>> {
    const OP: &str = "Uint64s";
    collect_array(reply, OP, |item| match item {
        Reply::Integer(value) => unsigned(OP, value),
        Reply::Bulk(data) => parse_uint(OP, &data),
        other => Err(ReplyError::unexpected_element(OP, other.kind())),
    })
}

pub(crate) fn float64s(reply: Reply) -> ReplyResult<Vec<f64>> {
    const OP: &str = "Float64s";
    collect_array(reply, OP, |item| match item {
        Reply::Double(value) => Ok(value),
        Reply::Bulk(data) => parse_float(OP, &data),
        other => Err(ReplyError::unexpected_element(OP, other.kind())),
    })
}

/// Array of alternating keys and values, as returned by HGETALL.
///
/// Keys must be text; nil values become empty strings. A repeated key keeps
/// its last value.
pub(crate) fn string_map(reply: Reply, mode: Utf8Mode) -> ReplyResult<HashMap<String, String>> {
    const OP: &str = "StringMap";
    let items = collect_array(reply, OP, |item| text_element(OP, item, mode).map(Some))?;
    if items.len() % 2 != 0 {
        return Err(ReplyError::OddLength {
            op: OP,
            len: items.len(),
        });
    }

    let mut map = HashMap::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        let key = key.ok_or_else(|| ReplyError::unexpected_element(OP, ReplyKind::Nil))?;
        map.insert(key, value.unwrap_or_default());
    }
    Ok(map)
}

fn text_element(op: &'static str, item: Reply, mode: Utf8Mode) -> ReplyResult<String> {
    match item {
        Reply::Bulk(data) => decode_text(op, &data, mode),
        Reply::Simple(text) => Ok(text),
        other => Err(ReplyError::unexpected_element(op, other.kind())),
    }
}
