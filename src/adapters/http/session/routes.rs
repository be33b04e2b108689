//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_session, get_session, list_sessions, SessionHandlers};

/// Creates the session router with all endpoints.
///
/// Routes (relative to the mount point, normally `/api/sessions`):
/// - `GET /` - List sessions
/// - `POST /` - Create a session
/// - `GET /:id` - Get one session with its ideas
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/:id", get(get_session))
        .with_state(handlers)
}
