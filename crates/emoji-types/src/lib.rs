//! Shared type definitions for the Emoji Registry service.
//!
//! Types defined here are what the HTTP API puts on the wire. They flow
//! downstream to `TypeScript` via `ts-rs` so browser clients share the
//! same shapes.
//!
//! # Modules
//!
//! - [`ids`] -- The [`EmojiId`] identifier and its path-parameter parser
//! - [`record`] -- The [`EmojiRecord`] entity

pub mod ids;
pub mod record;

pub use ids::{EmojiId, parse_emoji_id};
pub use record::EmojiRecord;
