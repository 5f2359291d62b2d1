//! Integration tests for the registry API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test builds its own state so mutations
//! never leak between tests.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get as get_route;
use emoji_api::router::{build_router, with_middleware};
use emoji_api::state::AppState;
use emoji_registry::EmojiCollection;
use emoji_types::EmojiRecord;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::seeded())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// GET /
// =========================================================================

#[tokio::test]
async fn test_index_returns_welcome() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "message": "Welcome to the Emoji Server" })
    );
}

// =========================================================================
// GET /emojis/:id
// =========================================================================

#[tokio::test]
async fn test_get_every_seeded_emoji() {
    let router = build_router(make_test_state());
    let seeded = EmojiCollection::seeded();

    for record in seeded.records() {
        let (status, json) = send(&router, get(&format!("/emojis/{}", record.id))).await;
        assert_eq!(status, StatusCode::OK);
        let returned: EmojiRecord = serde_json::from_value(json).unwrap();
        assert_eq!(&returned, record);
    }
}

#[tokio::test]
async fn test_get_returns_bare_record() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/emojis/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "id": 2, "character": "🚀", "name": "Rocket" }));
}

#[tokio::test]
async fn test_get_unknown_emoji_is_404() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/emojis/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "success": false, "message": "Emoji with that id does not exist" })
    );
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/emojis/rocket")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_get_with_trailing_slash() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/emojis/2/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Rocket");
}

#[tokio::test]
async fn test_invalid_utf8_id_uses_error_responder() {
    let router = build_router(make_test_state());

    for request in [
        get("/emojis/%FF"),
        delete("/emojis/%FF"),
        json_request("PUT", "/emojis/%FF", &json!({ "newId": 5 })),
    ] {
        let (status, json) = send(&router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
    }
}

#[tokio::test]
async fn test_get_uses_leading_digits() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/emojis/3abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Star");
}

// =========================================================================
// POST /emojis
// =========================================================================

#[tokio::test]
async fn test_create_emoji() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));
    let before = state.len().await;

    let (status, json) = send(
        &router,
        json_request("POST", "/emojis", &json!({ "name": "Test", "character": "🧪" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["emoji"]["id"], before + 1);
    assert_eq!(json["emoji"]["name"], "Test");
    assert_eq!(json["emoji"]["character"], "🧪");
    assert_eq!(state.len().await, before + 1);

    let uri = format!("/emojis/{}", json["emoji"]["id"]);
    let (status, fetched) = send(&router, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json["emoji"]);
}

#[tokio::test]
async fn test_create_without_character() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, json_request("POST", "/emojis", &json!({ "name": "Plain" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["emoji"].get("character").is_none());
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));
    let before = state.len().await;

    let (status, json) = send(&router, json_request("POST", "/emojis", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "success": false, "message": "You must provide a name for the emoji" })
    );
    assert_eq!(state.len().await, before);
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let router = build_router(make_test_state());

    let (status, json) = send(
        &router,
        json_request("POST", "/emojis", &json!({ "name": "", "character": "🧪" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_create_without_json_body_reports_missing_name() {
    let router = build_router(make_test_state());

    let request = Request::post("/emojis").body(Body::empty()).unwrap();
    let (status, json) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "You must provide a name for the emoji");
}

#[tokio::test]
async fn test_create_with_empty_json_body_reports_missing_name() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let request = Request::post("/emojis")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "success": false, "message": "You must provide a name for the emoji" })
    );
    assert_eq!(state.len().await, 30);
}

#[tokio::test]
async fn test_create_with_trailing_slash() {
    let router = build_router(make_test_state());

    let (status, json) = send(
        &router,
        json_request("POST", "/emojis/", &json!({ "name": "Slash", "character": "➗" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["emoji"]["id"], 31);
}

#[tokio::test]
async fn test_create_with_malformed_json_uses_error_responder() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let request = Request::post("/emojis")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, json) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(state.len().await, 30);
}

#[tokio::test]
async fn test_create_after_delete_never_reuses_live_id() {
    let router = build_router(make_test_state());

    let (status, _) = send(&router, delete("/emojis/1")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, created) = send(
        &router,
        json_request("POST", "/emojis", &json!({ "name": "Fresh", "character": "✨" })),
    )
    .await;
    assert_eq!(created["emoji"]["id"], 31);

    let (status, thirty) = send(&router, get("/emojis/30")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(thirty["name"], "Musical Notes");
}

// =========================================================================
// DELETE /emojis/:id
// =========================================================================

#[tokio::test]
async fn test_delete_emoji() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));
    let before = state.len().await;

    let (status, json) = send(&router, delete("/emojis/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "message": "Emoji deleted successfully" })
    );
    assert_eq!(state.len().await, before - 1);

    let (status, _) = send(&router, get("/emojis/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_delete_is_404() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let (first, _) = send(&router, delete("/emojis/7")).await;
    assert_eq!(first, StatusCode::OK);

    for _ in 0..2 {
        let (status, json) = send(&router, delete("/emojis/7")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "success": false, "message": "Emoji not found" }));
    }
    assert_eq!(state.len().await, 29);
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_404() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, delete("/emojis/abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Emoji not found");
}

// =========================================================================
// PUT /emojis/:id
// =========================================================================

#[tokio::test]
async fn test_update_emoji_id() {
    let router = build_router(make_test_state());

    let (status, json) = send(
        &router,
        json_request("PUT", "/emojis/2", &json!({ "newId": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "emoji": { "id": 999, "character": "🚀", "name": "Rocket" },
        })
    );

    let (status, fetched) = send(&router, get("/emojis/999")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Rocket");

    let (status, _) = send(&router, get("/emojis/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_emoji_is_404() {
    let router = build_router(make_test_state());

    let (status, json) = send(
        &router,
        json_request("PUT", "/emojis/500", &json!({ "newId": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "success": false, "message": "Emoji not found" }));
}

#[tokio::test]
async fn test_update_unknown_emoji_checked_before_body() {
    let router = build_router(make_test_state());

    let (status, _) = send(&router, json_request("PUT", "/emojis/500", &json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_new_id_is_400() {
    let router = build_router(make_test_state());

    for body in [json!({}), json!({ "newId": null }), json!({ "newId": 0 })] {
        let (status, json) = send(&router, json_request("PUT", "/emojis/3", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({ "success": false, "message": "You must provide a new ID for the emoji" })
        );
    }

    let (status, _) = send(&router, get("/emojis/3")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_with_empty_json_body_is_400() {
    let router = build_router(make_test_state());

    let request = Request::put("/emojis/2")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "success": false, "message": "You must provide a new ID for the emoji" })
    );
}

#[tokio::test]
async fn test_update_allows_duplicate_ids() {
    let router = build_router(make_test_state());

    let (status, _) = send(
        &router,
        json_request("PUT", "/emojis/10", &json!({ "newId": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // First match in collection order wins.
    let (_, json) = send(&router, get("/emojis/4")).await;
    assert_eq!(json["name"], "Party Popper");
}

// =========================================================================
// Fallbacks
// =========================================================================

#[tokio::test]
async fn test_unknown_route() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/nope")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": false, "error": "No route found." }));
}

#[tokio::test]
async fn test_unsupported_method_on_known_path() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, json_request("PATCH", "/emojis/1", &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "No route found.");

    let (status, json) = send(&router, get("/emojis")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "No route found.");
}

async fn explode() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn test_handler_panic_uses_error_responder() {
    let router = with_middleware(Router::new().route("/explode", get_route(explode)));

    let (status, json) = send(&router, get("/explode")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": false, "error": "handler exploded" }));
}

#[tokio::test]
async fn test_states_are_isolated() {
    let first = make_test_state();
    let second = make_test_state();

    let (status, _) = send(&build_router(Arc::clone(&first)), delete("/emojis/1")).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first.len().await, 29);
    assert_eq!(second.len().await, 30);
}
