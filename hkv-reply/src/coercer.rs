//! # Coercion API
//!
//! Purpose: Expose one entry point per target type, all sharing the contract
//! `(reply, upstream error) -> (typed value, error)`.
//!
//! ## Design Principles
//! 1. **Facade Pattern**: `Coercer` hides the scalar/array split and carries
//!    the decoding configuration.
//! 2. **Upstream First**: The input is a `Result`; an upstream `Err` is
//!    returned unchanged and the reply is never looked at.
//! 3. **Caller's Error Type**: Local failures are converted into the caller's
//!    error type through `From<ReplyError>`, so coercions compose with `?` in
//!    client code without re-wrapping upstream errors.
//!
//! The free functions at the crate root use `CoerceConfig::default()`.

use std::collections::HashMap;

use bytes::Bytes;

use crate::config::{CoerceConfig, Utf8Mode};
use crate::error::{ReplyError, ReplyResult};
use crate::value::Reply;
use crate::{list, scalar};

/// Reply coercer bound to a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coercer {
    config: CoerceConfig,
}

#[inline]
fn lift<T, E, F>(reply: Result<Reply, E>, convert: F) -> Result<T, E>
where
    E: From<ReplyError>,
    F: FnOnce(Reply) -> ReplyResult<T>,
{
    convert(reply?).map_err(E::from)
}

impl Coercer {
    /// Creates a coercer with a custom configuration.
    pub const fn new(config: CoerceConfig) -> Self {
        Coercer { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> CoerceConfig {
        self.config
    }

    fn utf8(&self) -> Utf8Mode {
        self.config.utf8
    }

    /// Converts to `i32`; integers outside the 32-bit range fail.
    pub fn int<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<i32, E> {
        lift(reply, scalar::int)
    }

    /// Converts to `i64`; floats are truncated toward zero.
    pub fn int64<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<i64, E> {
        lift(reply, scalar::int64)
    }

    /// Converts to `u64`; negative integers fail.
    pub fn uint64<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<u64, E> {
        lift(reply, scalar::uint64)
    }

    pub fn float64<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<f64, E> {
        lift(reply, scalar::float64)
    }

    /// Converts to text, decoding bulk strings per the configured UTF-8 mode.
    pub fn string<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<String, E> {
        let mode = self.utf8();
        lift(reply, |reply| scalar::string(reply, mode))
    }

    pub fn bytes<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Bytes, E> {
        lift(reply, scalar::bytes)
    }

    /// Converts to `bool`; integers are true when non-zero.
    pub fn boolean<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<bool, E> {
        lift(reply, scalar::boolean)
    }

    /// Converts an array to text; nil elements become `""`.
    pub fn strings<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<String>, E> {
        let mode = self.utf8();
        lift(reply, |reply| list::strings(reply, mode))
    }

    /// Returns the array elements unchanged.
    pub fn values<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<Reply>, E> {
        lift(reply, list::values)
    }

    pub fn byte_slices<E: From<ReplyError>>(
        &self,
        reply: Result<Reply, E>,
    ) -> Result<Vec<Option<Bytes>>, E> {
        lift(reply, list::byte_slices)
    }

    pub fn ints<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<i32>, E> {
        lift(reply, list::ints)
    }

    pub fn int64s<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<i64>, E> {
        lift(reply, list::int64s)
    }

    pub fn uint64s<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<u64>, E> {
        lift(reply, list::uint64s)
    }

    pub fn float64s<E: From<ReplyError>>(&self, reply: Result<Reply, E>) -> Result<Vec<f64>, E> {
        lift(reply, list::float64s)
    }

    /// Converts an array of alternating keys and values into a map.
    pub fn string_map<E: From<ReplyError>>(
        &self,
        reply: Result<Reply, E>,
    ) -> Result<HashMap<String, String>, E> {
        let mode = self.utf8();
        lift(reply, |reply| list::string_map(reply, mode))
    }
}

const DEFAULT: Coercer = Coercer::new(CoerceConfig {
    utf8: Utf8Mode::Lossy,
});

/// Converts a reply to `i32` with the default configuration.
pub fn int<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<i32, E> {
    DEFAULT.int(reply)
}

/// Converts a reply to `i64` with the default configuration.
pub fn int64<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<i64, E> {
    DEFAULT.int64(reply)
}

/// Converts a reply to `u64` with the default configuration.
pub fn uint64<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<u64, E> {
    DEFAULT.uint64(reply)
}

/// Converts a reply to `f64` with the default configuration.
pub fn float64<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<f64, E> {
    DEFAULT.float64(reply)
}

/// Converts a reply to `String`, decoding bulk bytes lossily.
pub fn string<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<String, E> {
    DEFAULT.string(reply)
}

/// Converts a reply to `Bytes` with the default configuration.
pub fn bytes<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Bytes, E> {
    DEFAULT.bytes(reply)
}

/// Converts a reply to `bool` with the default configuration.
pub fn boolean<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<bool, E> {
    DEFAULT.boolean(reply)
}

/// Converts an array reply to `Vec<String>` with the default configuration.
pub fn strings<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<String>, E> {
    DEFAULT.strings(reply)
}

/// Returns the elements of an array reply unchanged.
pub fn values<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<Reply>, E> {
    DEFAULT.values(reply)
}

pub fn byte_slices<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<Option<Bytes>>, E> {
    DEFAULT.byte_slices(reply)
}

pub fn ints<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<i32>, E> {
    DEFAULT.ints(reply)
}

pub fn int64s<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<i64>, E> {
    DEFAULT.int64s(reply)
}

pub fn uint64s<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<u64>, E> {
    DEFAULT.uint64s(reply)
}

pub fn float64s<E: From<ReplyError>>(reply: Result<Reply, E>) -> Result<Vec<f64>, E> {
    DEFAULT.float64s(reply)
}

pub fn string_map<E: From<ReplyError>>(
    reply: Result<Reply, E>,
) -> Result<HashMap<String, String>, E> {
    DEFAULT.string_map(reply)
}
