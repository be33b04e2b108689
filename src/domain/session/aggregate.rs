//! Brainstorm session aggregate.
//!
//! A session is a named container for an ordered list of ideas.
//!
//! # Ownership
//!
//! The session owns its ideas outright. The list is append-only: the only
//! way in is [`BrainstormSession::add_idea`], and it is exposed as a slice.

use serde::Serialize;

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

use super::idea::{Idea, IdeaSummary};

/// Maximum length for a session name.
pub const MAX_SESSION_NAME_LENGTH: usize = 500;

/// Brainstorm session aggregate.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes afterwards
/// - `ideas` keeps insertion order and only ever grows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrainstormSession {
    /// Store-assigned identifier.
    id: SessionId,

    /// Display name.
    name: String,

    /// When the session was created.
    created_at: Timestamp,

    /// Ideas in the order they were added.
    ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Materialize a stored draft under its newly assigned identifier.
    ///
    /// Only session stores call this; everyone else receives sessions back
    /// from a store.
    pub fn from_draft(id: SessionId, draft: NewSession) -> Self {
        Self {
            id,
            name: draft.name,
            created_at: draft.created_at,
            ideas: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the ideas in insertion order.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an idea after every existing one.
    pub fn add_idea(&mut self, idea: Idea) {
        self.ideas.push(idea);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projections
    // ─────────────────────────────────────────────────────────────────────────

    /// Summaries of every idea, in stored order.
    pub fn idea_summaries(&self) -> Vec<IdeaSummary> {
        self.ideas
            .iter()
            .map(|idea| idea.summarize(self.id))
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            idea_count: self.ideas.len(),
        }
    }

    /// Checks a candidate session name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `TooLong` if the name exceeds [`MAX_SESSION_NAME_LENGTH`]
    pub fn check_name(name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = trimmed.chars().count();
        if length > MAX_SESSION_NAME_LENGTH {
            return Err(ValidationError::too_long(
                "name",
                MAX_SESSION_NAME_LENGTH,
                length,
            ));
        }
        Ok(())
    }
}

/// A session that has not been stored yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    name: String,
    created_at: Timestamp,
}

impl NewSession {
    /// Draft a session created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_timestamp(name, Timestamp::now())
    }

    pub fn with_timestamp(name: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            name: name.into(),
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Session row for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub name: String,
    pub created_at: Timestamp,
    pub idea_count: usize,
}
