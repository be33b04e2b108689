//! HTTP DTOs for idea endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{AddIdeaCommand, Validated};
use crate::domain::foundation::{SessionId, ValidationError, ValidationErrors};
use crate::domain::session::{Idea, IdeaSummary};

/// Request to add an idea to a session.
///
/// Every field is optional at the wire level so that missing values are
/// reported as validation errors rather than as unreadable bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIdeaRequest {
    #[serde(default, alias = "sessionId")]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewIdeaRequest {
    /// Check the request, collecting every violation.
    ///
    /// A blank description is treated as absent.
    pub fn validate(self) -> Validated<AddIdeaCommand> {
        let mut errors = ValidationErrors::new();

        if self.session_id.is_none() {
            errors.push(ValidationError::required("session_id"));
        }

        let name = match self.name {
            None => {
                errors.push(ValidationError::required("name"));
                None
            }
            Some(name) => match Idea::check_name(&name) {
                Ok(()) => Some(name.trim().to_string()),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
        };

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(Err(e)) = description.as_deref().map(Idea::check_description) {
            errors.push(e);
        }

        match (self.session_id, name) {
            (Some(session_id), Some(name)) if errors.is_empty() => {
                Validated::Valid(AddIdeaCommand {
                    session_id: SessionId::new(session_id),
                    name,
                    description,
                })
            }
            _ => Validated::Invalid(errors),
        }
    }
}

/// Idea as returned from the per-session listing.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaSummaryResponse {
    pub session_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_created: String,
}

impl From<IdeaSummary> for IdeaSummaryResponse {
    fn from(summary: IdeaSummary) -> Self {
        Self {
            session_id: summary.session_id.value(),
            name: summary.name,
            description: summary.description,
            date_created: summary.created_at.to_rfc3339(),
        }
    }
}
