//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{CreateSessionCommand, Validated};
use crate::domain::foundation::{ValidationError, ValidationErrors};
use crate::domain::session::{BrainstormSession, Idea, SessionSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default, alias = "sessionName", alias = "session_name")]
    pub name: Option<String>,
}

impl CreateSessionRequest {
    /// Check the request, collecting every violation.
    pub fn validate(self) -> Validated<CreateSessionCommand> {
        let mut errors = ValidationErrors::new();

        let name = match self.name {
            None => {
                errors.push(ValidationError::required("name"));
                None
            }
            Some(name) => match BrainstormSession::check_name(&name) {
                Ok(()) => Some(name.trim().to_string()),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
        };

        match name {
            Some(name) if errors.is_empty() => Validated::Valid(CreateSessionCommand { name }),
            _ => Validated::Invalid(errors),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One idea inside a session response.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_created: String,
}

impl From<&Idea> for IdeaResponse {
    fn from(idea: &Idea) -> Self {
        Self {
            name: idea.name().to_string(),
            description: idea.description().map(str::to_string),
            date_created: idea.created_at().to_rfc3339(),
        }
    }
}

/// Full session, ideas included.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: i64,
    pub name: String,
    pub date_created: String,
    pub ideas: Vec<IdeaResponse>,
}

impl From<BrainstormSession> for SessionResponse {
    fn from(session: BrainstormSession) -> Self {
        Self {
            id: session.id().value(),
            name: session.name().to_string(),
            date_created: session.created_at().to_rfc3339(),
            ideas: session.ideas().iter().map(IdeaResponse::from).collect(),
        }
    }
}

/// Session row for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummaryResponse {
    pub id: i64,
    pub name: String,
    pub date_created: String,
    pub idea_count: usize,
}

impl From<SessionSummary> for SessionSummaryResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            id: summary.id.value(),
            name: summary.name,
            date_created: summary.created_at.to_rfc3339(),
            idea_count: summary.idea_count,
        }
    }
}
