//! Axum router construction for the API.
//!
//! Assembles all routes into a single [`Router`] with request tracing,
//! panic recovery and permissive CORS.

use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodRouter, get, post};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the registry.
///
/// The router includes:
/// - `GET /` -- welcome message
/// - `POST /emojis` -- create a record
/// - `GET /emojis/{emoji_id}` -- single record
/// - `PUT /emojis/{emoji_id}` -- reassign a record's id
/// - `DELETE /emojis/{emoji_id}` -- remove a record
///
/// Routing is not strict about a trailing slash: `/emojis/` and
/// `/emojis/{emoji_id}/` reach the same handlers. Unknown paths and
/// unsupported methods on known paths both land on [`handlers::no_route`].
pub fn build_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index).fallback(handlers::no_route))
        .route("/emojis", collection_routes())
        .route("/emojis/", collection_routes())
        .route("/emojis/{emoji_id}", record_routes())
        .route("/emojis/{emoji_id}/", record_routes())
        .fallback(handlers::no_route);

    with_middleware(routes).with_state(state)
}

/// Wrap `router` in the middleware stack shared by every route: request
/// tracing, panic recovery into the generic error response, and CORS.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors);

    router.layer(middleware)
}

fn collection_routes() -> MethodRouter<Arc<AppState>> {
    post(handlers::create_emoji).fallback(handlers::no_route)
}

fn record_routes() -> MethodRouter<Arc<AppState>> {
    get(handlers::get_emoji)
        .put(handlers::update_emoji)
        .delete(handlers::delete_emoji)
        .fallback(handlers::no_route)
}
