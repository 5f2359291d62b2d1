//! REST API endpoint handlers.
//!
//! All handlers work against the [`EmojiCollection`] held by the shared
//! [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Welcome message |
//! | `GET` | `/emojis/:emojiId` | Single record |
//! | `POST` | `/emojis` | Create a record |
//! | `DELETE` | `/emojis/:emojiId` | Remove a record |
//! | `PUT` | `/emojis/:emojiId` | Reassign a record's id |
//!
//! [`EmojiCollection`]: emoji_registry::EmojiCollection

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use emoji_registry::NewEmoji;
use emoji_types::{EmojiId, EmojiRecord, parse_emoji_id};
use tracing::info;

use crate::error::{ApiError, LOOKUP_NOT_FOUND, NOT_FOUND};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Greeting returned by `GET /`.
pub const WELCOME: &str = "Welcome to the Emoji Server";

/// Message returned after a successful delete.
pub const DELETED: &str = "Emoji deleted successfully";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /emojis`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateEmojiRequest {
    /// Display name (required, non-empty).
    #[serde(default)]
    pub name: Option<String>,
    /// Optional glyph.
    #[serde(default)]
    pub character: Option<String>,
}

/// Request body for `PUT /emojis/:emojiId`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmojiRequest {
    /// The id the record should carry from now on.
    #[serde(default)]
    pub new_id: Option<EmojiId>,
}

/// Success response carrying a message.
#[derive(Debug, serde::Serialize)]
struct MessageResponse {
    success: bool,
    message: &'static str,
}

/// Success response carrying a record.
#[derive(Debug, serde::Serialize)]
struct EmojiResponse {
    success: bool,
    emoji: EmojiRecord,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Answer with the welcome message.
pub async fn index() -> impl IntoResponse {
    Json(MessageResponse {
        success: true,
        message: WELCOME,
    })
}

// ---------------------------------------------------------------------------
// GET /emojis/:emojiId
// ---------------------------------------------------------------------------

/// Return the first record whose id matches the path parameter.
///
/// Ids that do not parse match nothing and answer 404.
pub async fn get_emoji(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    info!(emoji_id = %raw_id, "Received request for emoji");

    let registry = state.registry.read().await;
    let found = parse_emoji_id(&raw_id).and_then(|id| registry.get(id));

    if let Some(emoji) = found {
        info!(id = %emoji.id, "Emoji exists");
        Ok(Json(emoji.clone()))
    } else {
        info!(emoji_id = %raw_id, "Emoji does not exist");
        Err(ApiError::NotFound(LOOKUP_NOT_FOUND.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// POST /emojis
// ---------------------------------------------------------------------------

/// Append a new record with a freshly allocated id.
pub async fn create_emoji(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<CreateEmojiRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let JsonBody(request) = body?;

    let mut registry = state.registry.write().await;
    let emoji = registry.create(NewEmoji {
        name: request.name,
        character: request.character,
    })?;

    info!(id = %emoji.id, name = %emoji.name, "Emoji created");

    Ok(Json(EmojiResponse {
        success: true,
        emoji,
    }))
}

// ---------------------------------------------------------------------------
// DELETE /emojis/:emojiId
// ---------------------------------------------------------------------------

/// Remove the first record whose id matches the path parameter.
pub async fn delete_emoji(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_emoji_id(&raw_id).ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;

    let removed = state.registry.write().await.delete(id)?;
    info!(id = %removed.id, name = %removed.name, "Emoji deleted");

    Ok(Json(MessageResponse {
        success: true,
        message: DELETED,
    }))
}

// ---------------------------------------------------------------------------
// PUT /emojis/:emojiId
// ---------------------------------------------------------------------------

/// Replace the id of the first record whose id matches the path parameter.
///
/// The record must exist before the body is looked at, so an unknown id
/// answers 404 even when the body is also unusable.
pub async fn update_emoji(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<JsonBody<UpdateEmojiRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let mut registry = state.registry.write().await;

    let id = parse_emoji_id(&raw_id)
        .filter(|id| registry.position(*id).is_some())
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;

    let JsonBody(request) = body?;
    let emoji = registry.reassign_id(id, request.new_id)?;
    info!(from = %id, to = %emoji.id, "Emoji id updated");

    Ok(Json(EmojiResponse {
        success: true,
        emoji,
    }))
}

// ---------------------------------------------------------------------------
// Catch-all
// ---------------------------------------------------------------------------

/// Answer any request no route claims.
pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}
