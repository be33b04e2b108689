//! Outcome → response-shape mapping.
//!
//! Response shapes are the transport-neutral result categories the HTTP
//! adapter renders. The mapping functions here are pure and total.

use crate::domain::foundation::{SessionId, ValidationErrors};

use super::outcome::ActionOutcome;

/// External-facing result category of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape<T> {
    /// The payload was rejected; carries every validation error.
    BadRequest(ValidationErrors),
    /// The requested session does not exist.
    NotFound(SessionId),
    /// The action succeeded.
    Ok(T),
    /// The action created or extended a resource readable at `location`.
    Created { location: String, body: T },
}

/// Map an outcome onto its response shape, success becoming `Ok`.
pub fn respond<T>(outcome: ActionOutcome<T>) -> ResponseShape<T> {
    match outcome {
        ActionOutcome::ValidationFailure(errors) => ResponseShape::BadRequest(errors),
        ActionOutcome::NotFound(id) => ResponseShape::NotFound(id),
        ActionOutcome::Success(body) => ResponseShape::Ok(body),
    }
}

/// Map an outcome onto its response shape, success becoming `Created`.
///
/// `location` is only evaluated on success.
pub fn respond_created<T>(
    outcome: ActionOutcome<T>,
    location: impl FnOnce(&T) -> String,
) -> ResponseShape<T> {
    match outcome {
        ActionOutcome::ValidationFailure(errors) => ResponseShape::BadRequest(errors),
        ActionOutcome::NotFound(id) => ResponseShape::NotFound(id),
        ActionOutcome::Success(body) => ResponseShape::Created {
            location: location(&body),
            body,
        },
    }
}

impl<T> From<ActionOutcome<T>> for ResponseShape<T> {
    fn from(outcome: ActionOutcome<T>) -> Self {
        respond(outcome)
    }
}
