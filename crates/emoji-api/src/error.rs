//! Error types for the API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an Axum HTTP response via its [`IntoResponse`] implementation.
//! Domain failures answer with a `message` key; catch-all and unexpected
//! failures answer with an `error` key and status 200.

use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use emoji_registry::RegistryError;
use tracing::error;

/// Body of the lookup failure on `GET /emojis/{emojiId}`.
pub const LOOKUP_NOT_FOUND: &str = "Emoji with that id does not exist";
/// Body of the not-found failure on `DELETE` and `PUT`.
pub const NOT_FOUND: &str = "Emoji not found";
/// Body of the create failure when no name is given.
pub const MISSING_NAME: &str = "You must provide a name for the emoji";
/// Body of the update failure when no new id is given.
pub const MISSING_NEW_ID: &str = "You must provide a new ID for the emoji";
/// Body of the catch-all route.
pub const NO_ROUTE: &str = "No route found.";

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record was not found.
    #[error("{0}")]
    NotFound(String),

    /// A required request field was missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// No route matched the request path and method.
    #[error("No route found.")]
    NoRoute,

    /// Anything else that went wrong while handling the request.
    #[error("{0}")]
    Unhandled(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => Self::NotFound(NOT_FOUND.to_owned()),
            RegistryError::MissingName => Self::Validation(MISSING_NAME.to_owned()),
            RegistryError::MissingNewId => Self::Validation(MISSING_NEW_ID.to_owned()),
            RegistryError::IdSpaceExhausted => Self::Unhandled(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unhandled(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Unhandled(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "success": false, "message": message }),
            ),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "success": false, "message": message }),
            ),
            Self::NoRoute => (
                StatusCode::OK,
                serde_json::json!({ "success": false, "error": NO_ROUTE }),
            ),
            Self::Unhandled(message) => (
                StatusCode::OK,
                serde_json::json!({ "success": false, "error": message }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic error response.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer`, so a
/// panicking handler answers like any other unexpected failure instead of
/// dropping the connection.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        String::from("Unknown panic message")
    };

    error!(panic = %message, "request handler panicked");
    ApiError::Unhandled(message).into_response()
}
