//! AddIdeaHandler - Command handler for adding an idea to a session.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::outcome::{ActionOutcome, Validated};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{BrainstormSession, Idea};
use crate::ports::SessionRepository;

/// Command to add an idea to an existing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIdeaCommand {
    pub session_id: SessionId,
    pub name: String,
    pub description: Option<String>,
}

/// Handler for adding ideas.
pub struct AddIdeaHandler {
    repository: Arc<dyn SessionRepository>,
}

impl AddIdeaHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Validate → load → append → persist.
    ///
    /// Succeeds with the full updated session. Store failures are returned
    /// as `Err` untouched.
    pub async fn handle(
        &self,
        input: Validated<AddIdeaCommand>,
    ) -> Result<ActionOutcome<BrainstormSession>, DomainError> {
        // 1. Reject invalid payloads before touching the store
        let cmd = match input {
            Validated::Valid(cmd) => cmd,
            Validated::Invalid(errors) => {
                warn!(fields = errors.len(), "add idea rejected by validation");
                return Ok(ActionOutcome::ValidationFailure(errors));
            }
        };

        debug!(session_id = %cmd.session_id, "adding idea to session");

        // 2. Load session
        let Some(mut session) = self.repository.get_by_id(cmd.session_id).await? else {
            warn!(session_id = %cmd.session_id, "session not found");
            return Ok(ActionOutcome::NotFound(cmd.session_id));
        };

        // 3. Append
        session.add_idea(Idea::new(cmd.name, cmd.description));

        // 4. Persist
        self.repository.update(&session).await?;

        info!(
            session_id = %session.id(),
            idea_count = session.idea_count(),
            "idea added"
        );
        Ok(ActionOutcome::Success(session))
    }
}
