//! Session repository port.
//!
//! Defines the contract for storing and retrieving brainstorm sessions.
//! Implementations handle the actual storage; handlers only see this trait.
//!
//! # Design
//!
//! - **Absent is not an error**: lookups return `Ok(None)` for unknown ids
//! - **Store-assigned ids**: `add` takes an id-less draft and hands back the
//!   stored session
//! - **Store-defined order**: `list` ordering is the implementation's policy

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{BrainstormSession, NewSession};

/// Repository port for brainstorm session persistence.
///
/// `Err` is reserved for store failures (unavailable backend, lost write).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by its ID.
    ///
    /// Returns `None` if no session matches.
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError>;

    /// Persist changes to an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was never stored
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError>;

    /// List every stored session.
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError>;

    /// Store a new session, assigning its identifier.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add(&self, session: NewSession) -> Result<BrainstormSession, DomainError>;
}
