//! # HybridKV Reply Coercion
//!
//! Purpose: Turn the loosely-typed replies produced by the RESP decoder into
//! the concrete types callers ask for (integers, floats, text, booleans,
//! arrays), with one error contract shared by every conversion.
//!
//! ## Design Principles
//! 1. **Closed Variant Set**: `Reply` is an enum, so every conversion is an
//!    exhaustive match rather than a runtime type probe.
//! 2. **Upstream Passthrough**: Conversions take `Result<Reply, E>`; an
//!    upstream error is returned untouched.
//! 3. **Comparable Nil**: A nil reply always fails with `ReplyError::Nil`,
//!    never with a zero value.
//! 4. **Pure Functions**: No I/O, no shared state; every call only reads its
//!    arguments and is safe from any thread.
//!
//! ```
//! use hkv_reply::{Reply, ReplyError};
//!
//! let reply: Result<Reply, ReplyError> = Ok(Reply::bulk("42"));
//! assert_eq!(hkv_reply::int64(reply), Ok(42));
//!
//! let missing: Result<Reply, ReplyError> = Ok(Reply::Nil);
//! assert!(hkv_reply::string(missing).unwrap_err().is_nil());
//! ```

mod coercer;
mod config;
mod error;
mod list;
mod scalar;
mod value;

pub use coercer::{
    boolean, byte_slices, bytes, float64, float64s, int, int64, int64s, ints, string, string_map,
    strings, uint64, uint64s, values, Coercer,
};
pub use config::{CoerceConfig, Utf8Mode};
pub use error::{ReplyError, ReplyResult};
pub use list::collect_array;
pub use value::{Reply, ReplyKind};
