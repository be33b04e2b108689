//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::outcome::{ActionOutcome, Validated};
use crate::domain::foundation::DomainError;
use crate::domain::session::{BrainstormSession, NewSession};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSessionCommand {
    pub name: String,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        input: Validated<CreateSessionCommand>,
    ) -> Result<ActionOutcome<BrainstormSession>, DomainError> {
        let cmd = match input {
            Validated::Valid(cmd) => cmd,
            Validated::Invalid(errors) => {
                warn!(fields = errors.len(), "create session rejected by validation");
                return Ok(ActionOutcome::ValidationFailure(errors));
            }
        };

        let session = self.repository.add(NewSession::new(cmd.name)).await?;

        info!(session_id = %session.id(), "session created");
        Ok(ActionOutcome::Success(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{empty_session, RepoCall, SpyRepository};
    use crate::domain::foundation::{SessionId, ValidationError, ValidationErrors};

    #[tokio::test]
    async fn rejects_invalid_payload_without_touching_repository() {
        let repo = Arc::new(SpyRepository::new());
        let handler = CreateSessionHandler::new(repo.clone());
        let errors = ValidationErrors::from(ValidationError::required("name"));

        let result = handler.handle(Validated::Invalid(errors.clone())).await.unwrap();

        assert_eq!(result, ActionOutcome::ValidationFailure(errors));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn adds_session_with_store_assigned_id() {
        let repo = Arc::new(SpyRepository::with_session(empty_session(4, "Existing")));
        let handler = CreateSessionHandler::new(repo.clone());

        let session = handler
            .handle(Validated::Valid(CreateSessionCommand {
                name: "Test Name".to_string(),
            }))
            .await
            .unwrap()
            .success()
            .unwrap();

        assert_eq!(session.id(), SessionId::new(5));
        assert_eq!(session.name(), "Test Name");
        assert!(session.ideas().is_empty());
        assert_eq!(repo.calls(), vec![RepoCall::Add("Test Name".to_string())]);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let repo = Arc::new(SpyRepository::new().failing_writes());
        let handler = CreateSessionHandler::new(repo);

        let result = handler
            .handle(Validated::Valid(CreateSessionCommand {
                name: "Test Name".to_string(),
            }))
            .await;

        assert!(result.is_err());
    }
}
