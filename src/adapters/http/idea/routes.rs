//! HTTP routes for idea endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create, create_action_result, for_session, IdeaHandlers};

/// Creates the idea router with all endpoints.
///
/// Routes (relative to the mount point, normally `/api/ideas`):
/// - `GET /forsession/:session_id` - Ideas of a session
/// - `GET /forsessionactionresult/:session_id` - Same listing, alternate path
/// - `POST /create` - Add an idea (200 + session)
/// - `POST /createactionresult` - Add an idea (201 + `Location`)
pub fn idea_routes(handlers: IdeaHandlers) -> Router {
    Router::new()
        .route("/forsession/:session_id", get(for_session))
        .route("/forsessionactionresult/:session_id", get(for_session))
        .route("/create", post(create))
        .route("/createactionresult", post(create_action_result))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app() -> Router {
        let repository = Arc::new(InMemorySessionRepository::with_demo_data().await);
        Router::new().nest(
            "/api/ideas",
            idea_routes(IdeaHandlers::from_repository(repository)),
        )
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn for_session_returns_ok_for_known_session() {
        let response = app().await.oneshot(get("/api/ideas/forsession/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn for_session_action_result_returns_not_found_for_unknown_session() {
        let response = app()
            .await
            .oneshot(get("/api/ideas/forsessionactionresult/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn for_session_rejects_non_numeric_id() {
        let response = app()
            .await
            .oneshot(get("/api/ideas/forsession/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_returns_ok() {
        let response = app()
            .await
            .oneshot(post_json(
                "/api/ideas/create",
                r#"{"session_id":1,"name":"test name","description":"test description"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_action_result_returns_created_with_location() {
        let response = app()
            .await
            .oneshot(post_json(
                "/api/ideas/createactionresult",
                r#"{"session_id":1,"name":"test name"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/api/ideas/forsession/1"
        );
    }

    #[tokio::test]
    async fn create_with_malformed_body_returns_bad_request() {
        let response = app()
            .await
            .oneshot(post_json("/api/ideas/create", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_for_unknown_session_returns_not_found() {
        let response = app()
            .await
            .oneshot(post_json(
                "/api/ideas/createactionresult",
                r#"{"session_id":999,"name":"test name"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
