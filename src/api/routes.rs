//! Router configuration for the application.
//!
//! This module provides centralized route registration and middleware
//! configuration.

use axum::{
    http::StatusCode,
    middleware,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::api::handlers::{health, users};
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::api::views;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `GET /` - landing page with create form
/// - `GET /read` - user list
/// - `POST /create` - create user
/// - `GET /edit/{id}` - edit form
/// - `POST /update/{id}` - update user
/// - `GET /delete/{id}` - delete user
/// - `GET /api/health` - liveness check
/// - anything else - 404 page
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::index))
        .route("/read", get(users::read))
        .route("/create", post(users::create))
        .route("/edit/{id}", get(users::edit_form))
        .route("/update/{id}", post(users::update))
        .route("/delete/{id}", get(users::delete))
        .route("/api/health", get(health::health_check))
        .fallback(not_found)
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Handler for unmatched routes.
async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::DbHandle;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// State pointing at a dead address. Every test below exercises a path
    /// that fails before any connection attempt.
    fn test_state() -> AppState {
        AppState::new(Arc::new(DbHandle::new(DatabaseConfig {
            url: "mongodb://127.0.0.1:9/userhub".to_string(),
            name: "userhub".to_string(),
            connect_timeout_ms: 200,
        })))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_ok_without_database() {
        let router = create_router(test_state());
        let response = router
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_unmatched_route_renders_404_page() {
        let router = create_router(test_state());
        let response = router
            .oneshot(Request::get("/no-such-page").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_string(response).await;
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_create_with_missing_name_rerenders_form() {
        let router = create_router(test_state());
        let response = router
            .oneshot(form_request("/create", "name=&email=a%40x.com"))
            .await
            .unwrap();

        // Validation recovers inline: 200 with the form, not an error status
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Name is required"));
        assert!(body.contains(r#"value="a@x.com""#));
    }

    #[tokio::test]
    async fn test_create_with_blank_email_rerenders_form() {
        let router = create_router(test_state());
        let response = router
            .oneshot(form_request("/create", "name=Ann&email=+++"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Email is required"));
    }

    #[tokio::test]
    async fn test_update_with_missing_fields_rerenders_edit_form() {
        let router = create_router(test_state());
        let response = router
            .oneshot(form_request(
                "/update/64b5f0a1c2d3e4f5a6b7c8d9",
                "name=&email=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Name is required"));
        assert!(body.contains(r#"action="/update/64b5f0a1c2d3e4f5a6b7c8d9""#));
    }

    #[tokio::test]
    async fn test_delete_with_malformed_id_is_query_error() {
        let router = create_router(test_state());
        let response = router
            .oneshot(Request::get("/delete/not-an-id").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Malformed identifiers are query failures, never panics
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_edit_with_malformed_id_is_query_error() {
        let router = create_router(test_state());
        let response = router
            .oneshot(Request::get("/edit/zzz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id_header() {
        let router = create_router(test_state());
        let response = router
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_provided_request_id_is_echoed() {
        let router = create_router(test_state());
        let response = router
            .oneshot(
                Request::get("/api/health")
                    .header("x-request-id", "test-correlation-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "test-correlation-id"
        );
    }
}
