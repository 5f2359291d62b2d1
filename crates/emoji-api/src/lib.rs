//! HTTP API for the Emoji Registry service.
//!
//! This crate provides an Axum HTTP server exposing CRUD-style operations
//! over the in-memory [`EmojiCollection`]:
//!
//! - **`GET /`** -- welcome message
//! - **`GET /emojis/{emojiId}`** -- single record lookup
//! - **`POST /emojis`** -- create a record
//! - **`DELETE /emojis/{emojiId}`** -- remove a record
//! - **`PUT /emojis/{emojiId}`** -- reassign a record's id
//!
//! Anything else falls through to a catch-all that answers
//! `{"success": false, "error": "No route found."}`.
//!
//! # Architecture
//!
//! The collection is owned by [`AppState`] behind a `tokio` `RwLock` and
//! injected into handlers through Axum's `State` extractor. Each mutating
//! request holds the write guard for its whole find-and-mutate step, so
//! requests apply one at a time even on a multi-threaded runtime.
//!
//! [`EmojiCollection`]: emoji_registry::EmojiCollection

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
