//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};

use crate::adapters::http::response::{
    parse_session_id, rejection_errors, render, render_result,
};
use crate::application::{
    respond, respond_created, CreateSessionHandler, GetSessionHandler, GetSessionQuery,
    ListSessionsHandler, ResponseShape, Validated,
};
use crate::ports::SessionRepository;

use super::dto::{CreateSessionRequest, SessionResponse, SessionSummaryResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
        }
    }

    /// Wire every session handler to one repository.
    pub fn from_repository(repository: Arc<dyn SessionRepository>) -> Self {
        Self::new(
            Arc::new(CreateSessionHandler::new(repository.clone())),
            Arc::new(GetSessionHandler::new(repository.clone())),
            Arc::new(ListSessionsHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions - List sessions
pub async fn list_sessions(State(handlers): State<SessionHandlers>) -> Response {
    let result = handlers.list_handler.handle().await.map(|summaries| {
        ResponseShape::Ok(
            summaries
                .into_iter()
                .map(SessionSummaryResponse::from)
                .collect::<Vec<_>>(),
        )
    });
    render_result(result)
}

/// POST /api/sessions - Create a new session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(req)) => req.validate(),
        Err(rejection) => Validated::Invalid(rejection_errors(rejection)),
    };

    let result = handlers.create_handler.handle(input).await.map(|outcome| {
        respond_created(outcome.map(SessionResponse::from), |session| {
            format!("/api/sessions/{}", session.id)
        })
    });
    render_result(result)
}

/// GET /api/sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id, "id") {
        Ok(id) => id,
        Err(errors) => return render::<()>(ResponseShape::BadRequest(errors)),
    };

    let result = handlers
        .get_handler
        .handle(GetSessionQuery { session_id })
        .await
        .map(|outcome| respond(outcome.map(SessionResponse::from)));
    render_result(result)
}
