//! Coercion configuration.

use serde::{Deserialize, Serialize};

/// How bulk bytes are decoded when a caller asks for text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Mode {
    /// Invalid sequences are replaced with U+FFFD; decoding never fails.
    #[default]
    Lossy,
    /// Invalid sequences fail with `ReplyError::Utf8`.
    Strict,
}

/// Configuration for a `Coercer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoerceConfig {
    /// Text decoding policy for bulk strings.
    pub utf8: Utf8Mode,
}

impl CoerceConfig {
    /// Configuration that rejects bulk strings which are not valid UTF-8.
    pub const fn strict() -> Self {
        CoerceConfig {
            utf8: Utf8Mode::Strict,
        }
    }
}
