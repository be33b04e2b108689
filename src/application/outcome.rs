//! Handler inputs and outcomes.
//!
//! Every action receives its payload already checked by the caller
//! ([`Validated`]) and reports back with an [`ActionOutcome`]. Expected
//! failures (bad payload, unknown session) are outcome variants, not errors;
//! the `Err` side of a handler's `Result` is left for store failures.

use crate::domain::foundation::{SessionId, ValidationErrors};

/// A payload together with the verdict of upstream validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    /// The payload passed every check.
    Valid(T),
    /// The payload was rejected; there may be no usable payload at all.
    Invalid(ValidationErrors),
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }
}

impl<T> From<Result<T, ValidationErrors>> for Validated<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(payload) => Validated::Valid(payload),
            Err(errors) => Validated::Invalid(errors),
        }
    }
}

/// Classification of a completed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// Upstream validation rejected the payload.
    ValidationFailure(ValidationErrors),
    /// No session has the requested identifier.
    NotFound(SessionId),
    /// The action completed and produced `T`.
    Success(T),
}

impl<T> ActionOutcome<T> {
    /// Transform the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionOutcome<U> {
        match self {
            ActionOutcome::ValidationFailure(errors) => ActionOutcome::ValidationFailure(errors),
            ActionOutcome::NotFound(id) => ActionOutcome::NotFound(id),
            ActionOutcome::Success(value) => ActionOutcome::Success(f(value)),
        }
    }

    /// The success payload, if any.
    pub fn success(self) -> Option<T> {
        match self {
            ActionOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}
