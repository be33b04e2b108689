//! GetSessionHandler - Query handler for retrieving one session.

use std::sync::Arc;

use tracing::warn;

use crate::application::outcome::ActionOutcome;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::BrainstormSession;
use crate::ports::SessionRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetSessionQuery,
    ) -> Result<ActionOutcome<BrainstormSession>, DomainError> {
        match self.repository.get_by_id(query.session_id).await? {
            Some(session) => Ok(ActionOutcome::Success(session)),
            None => {
                warn!(session_id = %query.session_id, "session not found");
                Ok(ActionOutcome::NotFound(query.session_id))
            }
        }
    }
}
