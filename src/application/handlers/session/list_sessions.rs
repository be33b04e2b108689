//! ListSessionsHandler - Query handler for every stored session.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::session::SessionSummary;
use crate::ports::SessionRepository;

/// Handler for listing sessions.
///
/// Order is whatever the store returns.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<SessionSummary>, DomainError> {
        let sessions = self.repository.list().await?;
        debug!(count = sessions.len(), "listed sessions");
        Ok(sessions.iter().map(|s| s.summary()).collect())
    }
}
