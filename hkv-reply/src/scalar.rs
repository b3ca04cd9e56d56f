//! # Scalar Coercions
//!
//! Purpose: Convert a single reply into a number, text, bytes, or boolean.
//!
//! ## Design Principles
//! 1. **Exhaustive Dispatch**: Each conversion matches on the closed `Reply`
//!    set; the catch-all arm is the "unexpected type" failure.
//! 2. **Uniform Prelude**: Nil fails with the sentinel and error replies
//!    surface the server message, for every target.
//! 3. **No Hidden Zeroes**: A failed conversion never yields a default value.
//!
//! These functions see the reply after any upstream error has already been
//! returned to the caller; see `Coercer` for the public entry points.

use std::borrow::Cow;
use std::num::ParseIntError;
use std::str::FromStr;

use bytes::Bytes;

use crate::config::Utf8Mode;
use crate::error::{ReplyError, ReplyResult};
use crate::value::Reply;

/// Converts to a 32-bit signed integer.
///
/// | Reply    | Result                         |
/// |----------|--------------------------------|
/// | integer  | value, range-checked           |
/// | bulk     | parsed base-10                 |
/// | nil      | `ReplyError::Nil`              |
/// | error    | `ReplyError::Server`           |
/// | other    | `ReplyError::UnexpectedType`   |
pub(crate) fn int(reply: Reply) -> ReplyResult<i32> {
    const OP: &str = "Int";
    match reply {
        Reply::Integer(value) => narrow(OP, value),
        Reply::Bulk(data) => parse_int(OP, &data),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to a 64-bit signed integer.
///
/// Floats are truncated toward zero; out-of-range floats saturate and NaN
/// becomes zero.
pub(crate) fn int64(reply: Reply) -> ReplyResult<i64> {
    const OP: &str = "Int64";
    match reply {
        Reply::Integer(value) => Ok(value),
        Reply::Integer32(value) => Ok(i64::from(value)),
        Reply::Double(value) => Ok(value as i64),
        Reply::Float(value) => Ok(value as i64),
        Reply::Bulk(data) => parse_int(OP, &data),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to a 64-bit unsigned integer. Negative integers are rejected.
pub(crate) fn uint64(reply: Reply) -> ReplyResult<u64> {
    const OP: &str = "Uint64";
    match reply {
        Reply::Integer(value) => unsigned(OP, value),
        Reply::Bulk(data) => parse_uint(OP, &data),
        Reply::Simple(text) => parse_uint(OP, text.as_bytes()),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to a 64-bit float.
pub(crate) fn float64(reply: Reply) -> ReplyResult<f64> {
    const OP: &str = "Float64";
    match reply {
        Reply::Double(value) => Ok(value),
        Reply::Float(value) => Ok(f64::from(value)),
        Reply::Integer(value) => Ok(value as f64),
        Reply::Integer32(value) => Ok(f64::from(value)),
        Reply::Bulk(data) => parse_float(OP, &data),
        Reply::Simple(text) => parse_float(OP, text.as_bytes()),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to owned text.
pub(crate) fn string(reply: Reply, mode: Utf8Mode) -> ReplyResult<String> {
    const OP: &str = "String";
    match reply {
        Reply::Bulk(data) => decode_text(OP, &data, mode),
        Reply::Simple(text) => Ok(text),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to raw bytes.
pub(crate) fn bytes(reply: Reply) -> ReplyResult<Bytes> {
    const OP: &str = "Bytes";
    match reply {
        Reply::Bulk(data) => Ok(data),
        Reply::Simple(text) => Ok(Bytes::from(text.into_bytes())),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

/// Converts to a boolean. Integers are true when non-zero.
pub(crate) fn boolean(reply: Reply) -> ReplyResult<bool> {
    const OP: &str = "Bool";
    match reply {
        Reply::Integer(value) => Ok(value != 0),
        Reply::Bulk(data) => parse_bool(OP, &data),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::unexpected(OP, other.kind())),
    }
}

#[inline]
pub(crate) fn narrow(op: &'static str, value: i64) -> ReplyResult<i32> {
    i32::try_from(value).map_err(|_| ReplyError::out_of_range(op, value))
}

#[inline]
pub(crate) fn unsigned(op: &'static str, value: i64) -> ReplyResult<u64> {
    u64::try_from(value).map_err(|_| ReplyError::negative(op, value))
}

/// Decodes bulk bytes as text under the given policy.
pub(crate) fn decode_text(op: &'static str, data: &Bytes, mode: Utf8Mode) -> ReplyResult<String> {
    match mode {
        Utf8Mode::Lossy => Ok(String::from_utf8_lossy(data).into_owned()),
        Utf8Mode::Strict => std::str::from_utf8(data)
            .map(str::to_owned)
            .map_err(|err| ReplyError::utf8(op, err)),
    }
}

/// Parses base-10 text into any primitive integer width.
pub(crate) fn parse_int<T>(op: &'static str, data: &[u8]) -> ReplyResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    // Invalid UTF-8 can never be a valid integer; the replacement character
    // makes the parse fail with the standard error.
    let text = String::from_utf8_lossy(data);
    text.parse::<T>()
        .map_err(|err| ReplyError::parse_int(op, &text, err))
}

/// Parses unsigned base-10 text. No sign is accepted, not even `+`.
pub(crate) fn parse_uint(op: &'static str, data: &[u8]) -> ReplyResult<u64> {
    if data.first() == Some(&b'+') {
        // A bare sign yields the standard invalid-digit error.
        if let Err(err) = "+".parse::<u64>() {
            return Err(ReplyError::parse_int(op, &String::from_utf8_lossy(data), err));
        }
    }
    parse_int(op, data)
}

pub(crate) fn parse_float(op: &'static str, data: &[u8]) -> ReplyResult<f64> {
    let text = String::from_utf8_lossy(data);
    text.parse::<f64>()
        .map_err(|err| ReplyError::parse_float(op, &text, err))
}

/// Accepts the canonical literals `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub(crate) fn parse_bool(op: &'static str, data: &[u8]) -> ReplyResult<bool> {
    match data {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        _ => {
            let text: Cow<'_, str> = String::from_utf8_lossy(data);
            Err(ReplyError::parse_bool(op, &text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ReplyKind;

    #[test]
    fn int_accepts_integer_in_range() {
        assert_eq!(int(Reply::Integer(5)), Ok(5));
        assert_eq!(int(Reply::Integer(i64::from(i32::MIN))), Ok(i32::MIN));
    }

    #[test]
    fn int_rejects_wide_integer() {
        assert_eq!(
            int(Reply::Integer(1 << 40)),
            Err(ReplyError::OutOfRange {
                op: "Int",
                value: 1 << 40
            })
        );
    }

    #[test]
    fn int_parses_bulk() {
        assert_eq!(int(Reply::bulk("-17")), Ok(-17));
        assert!(matches!(
            int(Reply::bulk("99999999999")),
            Err(ReplyError::ParseInt { op: "Int", .. })
        ));
    }

    #[test]
    fn int_rejects_simple_string() {
        assert_eq!(
            int(Reply::simple("5")),
            Err(ReplyError::UnexpectedType {
                op: "Int",
                kind: ReplyKind::Simple
            })
        );
    }

    #[test]
    fn int64_widens_and_truncates() {
        assert_eq!(int64(Reply::Integer32(-3)), Ok(-3));
        assert_eq!(int64(Reply::Double(2.9)), Ok(2));
        assert_eq!(int64(Reply::Double(-2.9)), Ok(-2));
        assert_eq!(int64(Reply::Float(7.5)), Ok(7));
        assert_eq!(int64(Reply::Double(f64::NAN)), Ok(0));
    }

    #[test]
    fn int64_parse_failure_carries_input() {
        match int64(Reply::bulk("notanum")) {
            Err(ReplyError::ParseInt { op, input, .. }) => {
                assert_eq!(op, "Int64");
                assert_eq!(input, "notanum");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn uint64_rejects_negative() {
        assert_eq!(
            uint64(Reply::Integer(-1)),
            Err(ReplyError::Negative {
                op: "Uint64",
                value: -1
            })
        );
        assert_eq!(uint64(Reply::Integer(7)), Ok(7));
    }

    #[test]
    fn uint64_parses_full_range_text() {
        assert_eq!(uint64(Reply::bulk("18446744073709551615")), Ok(u64::MAX));
        assert_eq!(uint64(Reply::simple("12")), Ok(12));
        assert!(matches!(
            uint64(Reply::bulk("-1")),
            Err(ReplyError::ParseInt { .. })
        ));
    }

    #[test]
    fn uint64_rejects_explicit_plus_sign() {
        match uint64(Reply::bulk("+7")) {
            Err(ReplyError::ParseInt { op, input, .. }) => {
                assert_eq!(op, "Uint64");
                assert_eq!(input, "+7");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            uint64(Reply::simple("+0")),
            Err(ReplyError::ParseInt { .. })
        ));
    }

    #[test]
    fn float64_accepts_numbers_and_text() {
        assert_eq!(float64(Reply::Double(2.5)), Ok(2.5));
        assert_eq!(float64(Reply::Float(1.5)), Ok(1.5));
        assert_eq!(float64(Reply::Integer(3)), Ok(3.0));
        assert_eq!(float64(Reply::Integer32(-4)), Ok(-4.0));
        assert_eq!(float64(Reply::bulk("1e3")), Ok(1000.0));
        assert_eq!(float64(Reply::simple("-0.25")), Ok(-0.25));
        assert!(matches!(
            float64(Reply::bulk("1.2.3")),
            Err(ReplyError::ParseFloat { .. })
        ));
    }

    #[test]
    fn string_decodes_bulk_and_passes_simple() {
        assert_eq!(string(Reply::bulk("hi"), Utf8Mode::Lossy), Ok("hi".to_string()));
        assert_eq!(string(Reply::simple("OK"), Utf8Mode::Strict), Ok("OK".to_string()));
    }

    #[test]
    fn string_utf8_modes() {
        let invalid = Reply::bulk([0x66u8, 0xff, 0x6f]);
        assert_eq!(
            string(invalid.clone(), Utf8Mode::Lossy),
            Ok("f\u{fffd}o".to_string())
        );
        assert!(matches!(
            string(invalid, Utf8Mode::Strict),
            Err(ReplyError::Utf8 { op: "String", .. })
        ));
    }

    #[test]
    fn bytes_accepts_bulk_and_simple() {
        assert_eq!(bytes(Reply::bulk("raw")), Ok(Bytes::from_static(b"raw")));
        assert_eq!(bytes(Reply::simple("OK")), Ok(Bytes::from_static(b"OK")));
        assert_eq!(
            bytes(Reply::Integer(1)),
            Err(ReplyError::UnexpectedType {
                op: "Bytes",
                kind: ReplyKind::Integer
            })
        );
    }

    #[test]
    fn boolean_from_integer() {
        assert_eq!(boolean(Reply::Integer(0)), Ok(false));
        assert_eq!(boolean(Reply::Integer(3)), Ok(true));
        assert_eq!(boolean(Reply::Integer(-1)), Ok(true));
    }

    #[test]
    fn boolean_literals() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(boolean(Reply::bulk(text)), Ok(true), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(boolean(Reply::bulk(text)), Ok(false), "{text}");
        }
        assert_eq!(
            boolean(Reply::bulk("yes")),
            Err(ReplyError::ParseBool {
                op: "Bool",
                input: "yes".to_string()
            })
        );
    }

    #[test]
    fn boolean_rejects_double() {
        assert_eq!(
            boolean(Reply::Double(1.0)),
            Err(ReplyError::UnexpectedType {
                op: "Bool",
                kind: ReplyKind::Double
            })
        );
    }

    #[test]
    fn nil_and_error_prelude() {
        assert_eq!(int(Reply::Nil), Err(ReplyError::Nil));
        assert_eq!(float64(Reply::Nil), Err(ReplyError::Nil));
        assert_eq!(
            uint64(Reply::error("ERR no such key")),
            Err(ReplyError::Server("ERR no such key".to_string()))
        );
        assert_eq!(
            string(Reply::error("WRONGTYPE"), Utf8Mode::Lossy),
            Err(ReplyError::Server("WRONGTYPE".to_string()))
        );
    }
}
