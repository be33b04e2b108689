//! In-Memory Session Repository Adapter
//!
//! Keeps sessions in a map behind an async lock. Identifiers are handed out
//! sequentially starting at 1. Useful for development and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::{BrainstormSession, Idea, NewSession};
use crate::ports::SessionRepository;

#[derive(Debug)]
struct Store {
    sessions: BTreeMap<SessionId, BrainstormSession>,
    next_id: SessionId,
}

/// In-memory storage for brainstorm sessions.
///
/// `list` returns sessions in ascending id order.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                sessions: BTreeMap::new(),
                next_id: SessionId::new(1),
            })),
        }
    }

    /// Create a repository holding one demo session with a few ideas.
    pub async fn with_demo_data() -> Self {
        let repository = Self::new();
        repository.seed_demo_data().await;
        repository
    }

    /// Insert the demo session.
    pub async fn seed_demo_data(&self) {
        let created_at = Timestamp::from_ymd(2016, 8, 1).unwrap_or_default();
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id.next();

        let mut session = BrainstormSession::from_draft(
            id,
            NewSession::with_timestamp("Test Session 1", created_at),
        );
        for n in 1..=3 {
            session.add_idea(Idea::with_timestamp(
                format!("Idea {}", n),
                Some(format!("Description {}", n)),
                created_at,
            ));
        }
        store.sessions.insert(id, session);
        debug!(session_id = %id, "seeded demo session");
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.store.read().await.sessions.len()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        let store = self.store.read().await;
        Ok(store.sessions.get(&id).cloned())
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.sessions.get_mut(&session.id()) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Cannot update session {} that was never stored", session.id()),
            )),
        }
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        let store = self.store.read().await;
        Ok(store.sessions.values().cloned().collect())
    }

    async fn add(&self, session: NewSession) -> Result<BrainstormSession, DomainError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id.next();

        let stored = BrainstormSession::from_draft(id, session);
        store.sessions.insert(id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_assigns_sequential_ids() {
        let repo = InMemorySessionRepository::new();

        let first = repo.add(NewSession::new("first")).await.unwrap();
        let second = repo.add(NewSession::new("second")).await.unwrap();

        assert_eq!(first.id(), SessionId::new(1));
        assert_eq!(second.id(), SessionId::new(2));
        assert_eq!(repo.session_count().await, 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.get_by_id(SessionId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_session() {
        let repo = InMemorySessionRepository::new();
        let mut session = repo.add(NewSession::new("session")).await.unwrap();

        session.add_idea(Idea::new("idea", None));
        repo.update(&session).await.unwrap();

        let stored = repo.get_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.idea_count(), 1);
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn update_of_unstored_session_fails() {
        let repo = InMemorySessionRepository::new();
        let ghost = BrainstormSession::from_draft(SessionId::new(9), NewSession::new("ghost"));

        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn fetched_sessions_are_independent_copies() {
        let repo = InMemorySessionRepository::new();
        let id = repo.add(NewSession::new("session")).await.unwrap().id();

        let mut fetched = repo.get_by_id(id).await.unwrap().unwrap();
        fetched.add_idea(Idea::new("unsaved", None));

        let again = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(again.idea_count(), 0);
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let repo = InMemorySessionRepository::new();
        repo.add(NewSession::new("a")).await.unwrap();
        repo.add(NewSession::new("b")).await.unwrap();
        repo.add(NewSession::new("c")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn demo_data_seeds_one_session_with_ideas() {
        let repo = InMemorySessionRepository::with_demo_data().await;

        let sessions = repo.list().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name(), "Test Session 1");
        assert_eq!(sessions[0].idea_count(), 3);

        let next = repo.add(NewSession::new("next")).await.unwrap();
        assert_eq!(next.id(), SessionId::new(2));
    }
}
