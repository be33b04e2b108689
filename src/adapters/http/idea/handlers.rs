//! HTTP handlers for idea endpoints.
//!
//! Two flavours of each action are exposed. The plain ones answer a
//! successful add with 200 and the session; the `*actionresult` ones answer
//! with 201 and a `Location` pointing at the session's idea list. Listing
//! behaves the same under both paths.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};

use crate::adapters::http::response::{
    parse_session_id, rejection_errors, render, render_result,
};
use crate::adapters::http::session::SessionResponse;
use crate::application::{
    respond, respond_created, AddIdeaCommand, AddIdeaHandler, ListIdeasHandler, ListIdeasQuery,
    ResponseShape, Validated,
};
use crate::ports::SessionRepository;

use super::dto::{IdeaSummaryResponse, NewIdeaRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IdeaHandlers {
    add_handler: Arc<AddIdeaHandler>,
    list_handler: Arc<ListIdeasHandler>,
}

impl IdeaHandlers {
    pub fn new(add_handler: Arc<AddIdeaHandler>, list_handler: Arc<ListIdeasHandler>) -> Self {
        Self {
            add_handler,
            list_handler,
        }
    }

    /// Wire every idea handler to one repository.
    pub fn from_repository(repository: Arc<dyn SessionRepository>) -> Self {
        Self::new(
            Arc::new(AddIdeaHandler::new(repository.clone())),
            Arc::new(ListIdeasHandler::new(repository)),
        )
    }
}

fn idea_list_location(session: &SessionResponse) -> String {
    format!("/api/ideas/forsession/{}", session.id)
}

fn into_input(payload: Result<Json<NewIdeaRequest>, JsonRejection>) -> Validated<AddIdeaCommand> {
    match payload {
        Ok(Json(req)) => req.validate(),
        Err(rejection) => Validated::Invalid(rejection_errors(rejection)),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ideas/forsession/:session_id - Ideas of one session
pub async fn for_session(
    State(handlers): State<IdeaHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id, "session_id") {
        Ok(id) => id,
        Err(errors) => return render::<()>(ResponseShape::BadRequest(errors)),
    };

    let result = handlers
        .list_handler
        .handle(ListIdeasQuery { session_id })
        .await
        .map(|outcome| {
            respond(outcome.map(|ideas| {
                ideas
                    .into_iter()
                    .map(IdeaSummaryResponse::from)
                    .collect::<Vec<_>>()
            }))
        });
    render_result(result)
}

/// POST /api/ideas/create - Add an idea, answering with the updated session
pub async fn create(
    State(handlers): State<IdeaHandlers>,
    payload: Result<Json<NewIdeaRequest>, JsonRejection>,
) -> Response {
    let result = handlers
        .add_handler
        .handle(into_input(payload))
        .await
        .map(|outcome| respond(outcome.map(SessionResponse::from)));
    render_result(result)
}

/// POST /api/ideas/createactionresult - Add an idea, answering 201 Created
pub async fn create_action_result(
    State(handlers): State<IdeaHandlers>,
    payload: Result<Json<NewIdeaRequest>, JsonRejection>,
) -> Response {
    let result = handlers
        .add_handler
        .handle(into_input(payload))
        .await
        .map(|outcome| {
            respond_created(outcome.map(SessionResponse::from), idea_list_location)
        });
    render_result(result)
}
