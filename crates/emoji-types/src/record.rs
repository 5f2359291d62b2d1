//! The emoji record entity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EmojiId;

/// A single emoji entry held by the registry.
///
/// `character` is optional because records created through the API may omit
/// it; an absent glyph is left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmojiRecord {
    /// Record identifier.
    pub id: EmojiId,
    /// The emoji glyph, e.g. `🚀`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub character: Option<String>,
    /// Human-readable label, e.g. `Rocket`.
    pub name: String,
}

impl EmojiRecord {
    /// Build a record with a glyph.
    pub fn new(id: impl Into<EmojiId>, character: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            character: Some(character.to_owned()),
            name: name.to_owned(),
        }
    }
}
