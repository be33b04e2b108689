//! Spy repository shared by the handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::{BrainstormSession, Idea, NewSession};
use crate::ports::SessionRepository;

/// One recorded repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    GetById(SessionId),
    Update(BrainstormSession),
    List,
    Add(String),
}

/// In-memory repository that records every call it receives.
pub struct SpyRepository {
    sessions: Mutex<Vec<BrainstormSession>>,
    calls: Mutex<Vec<RepoCall>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl SpyRepository {
    pub fn new() -> Self {
        Self::with_sessions(Vec::new())
    }

    pub fn with_session(session: BrainstormSession) -> Self {
        Self::with_sessions(vec![session])
    }

    pub fn with_sessions(sessions: Vec<BrainstormSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            calls: Mutex::new(Vec::new()),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<BrainstormSession> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepoCall::Update(session) => Some(session),
                _ => None,
            })
            .collect()
    }

    pub fn stored(&self, id: SessionId) -> Option<BrainstormSession> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn store_failure() -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, "Simulated store failure")
    }
}

#[async_trait]
impl SessionRepository for SpyRepository {
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        self.record(RepoCall::GetById(id));
        if self.fail_reads {
            return Err(Self::store_failure());
        }
        Ok(self.stored(id))
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        self.record(RepoCall::Update(session.clone()));
        if self.fail_writes {
            return Err(Self::store_failure());
        }
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(pos) = sessions.iter().position(|s| s.id() == session.id()) {
            sessions[pos] = session.clone();
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        self.record(RepoCall::List);
        if self.fail_reads {
            return Err(Self::store_failure());
        }
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn add(&self, session: NewSession) -> Result<BrainstormSession, DomainError> {
        self.record(RepoCall::Add(session.name().to_string()));
        if self.fail_writes {
            return Err(Self::store_failure());
        }
        let mut sessions = self.sessions.lock().unwrap();
        let id = sessions
            .iter()
            .map(|s| s.id())
            .max()
            .map(|id| id.next())
            .unwrap_or(SessionId::new(1));
        let stored = BrainstormSession::from_draft(id, session);
        sessions.push(stored.clone());
        Ok(stored)
    }
}

/// Session `id` holding a single idea named "One".
pub fn session_with_one_idea(id: i64) -> BrainstormSession {
    let created_at = Timestamp::from_ymd(2021, 1, 10).unwrap();
    let mut session = BrainstormSession::from_draft(
        SessionId::new(id),
        NewSession::with_timestamp("Test One", created_at),
    );
    session.add_idea(Idea::with_timestamp("One", None, created_at));
    session
}

/// Session `id` with no ideas.
pub fn empty_session(id: i64, name: &str) -> BrainstormSession {
    BrainstormSession::from_draft(
        SessionId::new(id),
        NewSession::with_timestamp(name, Timestamp::from_ymd(2020, 7, 2).unwrap()),
    )
}
