//! Integer identifier for emoji records.
//!
//! Ids are positive integers. They are unique when handed out by the
//! registry, but id reassignment may introduce duplicates, so lookups
//! always resolve to the first match in collection order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of an emoji record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmojiId(#[ts(type = "number")] pub u64);

impl EmojiId {
    /// Return the raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EmojiId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmojiId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EmojiId> for u64 {
    fn from(id: EmojiId) -> Self {
        id.0
    }
}

/// Parse a path parameter into an [`EmojiId`] using leading-integer rules.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is read and anything after it is ignored, so `"12abc"`
/// yields `12`. Returns `None` when no digits lead the input, when the value
/// is negative, or when it does not fit in a `u64`. `None` matches no record.
pub fn parse_emoji_id(raw: &str) -> Option<EmojiId> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..digits_end)?;
    if digits.is_empty() {
        return None;
    }

    let value: u64 = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(EmojiId(value))
}
