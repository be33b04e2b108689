//! ListIdeasHandler - Query handler for the ideas of one session.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::outcome::ActionOutcome;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::IdeaSummary;
use crate::ports::SessionRepository;

/// Query for the ideas of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIdeasQuery {
    pub session_id: SessionId,
}

/// Handler for listing a session's ideas.
pub struct ListIdeasHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListIdeasHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Summaries of the session's ideas in stored order; empty when the
    /// session has none.
    pub async fn handle(
        &self,
        query: ListIdeasQuery,
    ) -> Result<ActionOutcome<Vec<IdeaSummary>>, DomainError> {
        debug!(session_id = %query.session_id, "listing ideas");

        match self.repository.get_by_id(query.session_id).await? {
            Some(session) => Ok(ActionOutcome::Success(session.idea_summaries())),
            None => {
                warn!(session_id = %query.session_id, "session not found");
                Ok(ActionOutcome::NotFound(query.session_id))
            }
        }
    }
}
