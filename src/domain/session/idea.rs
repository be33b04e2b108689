//! Idea entity - a named thought captured inside a brainstorm session.

use serde::Serialize;

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

/// Maximum length for an idea name.
pub const MAX_IDEA_NAME_LENGTH: usize = 500;

/// Maximum length for an idea description.
pub const MAX_IDEA_DESCRIPTION_LENGTH: usize = 2000;

/// A name/description pair owned by exactly one session.
///
/// Ideas carry no reference back to their session; the session's idea list
/// is the only place an idea lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Idea {
    name: String,
    description: Option<String>,
    created_at: Timestamp,
}

impl Idea {
    /// Create an idea stamped with the current time.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self::with_timestamp(name, description, Timestamp::now())
    }

    /// Create an idea with an explicit creation time (seeding, tests).
    pub fn with_timestamp(
        name: impl Into<String>,
        description: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Project this idea into its transfer shape.
    pub fn summarize(&self, session_id: SessionId) -> IdeaSummary {
        IdeaSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            session_id,
            created_at: self.created_at,
        }
    }

    /// Checks a candidate idea name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `TooLong` if the name exceeds [`MAX_IDEA_NAME_LENGTH`]
    pub fn check_name(name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = trimmed.chars().count();
        if length > MAX_IDEA_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_IDEA_NAME_LENGTH, length));
        }
        Ok(())
    }

    /// Checks a candidate idea description.
    pub fn check_description(description: &str) -> Result<(), ValidationError> {
        let length = description.chars().count();
        if length > MAX_IDEA_DESCRIPTION_LENGTH {
            return Err(ValidationError::too_long(
                "description",
                MAX_IDEA_DESCRIPTION_LENGTH,
                length,
            ));
        }
        Ok(())
    }
}

/// Read-only projection of an idea returned from collection queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub session_id: SessionId,
    pub created_at: Timestamp,
}
