//! Rendering of response shapes into HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ResponseShape;
use crate::domain::foundation::{DomainError, SessionId, ValidationError, ValidationErrors};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: "One or more validation errors occurred".to_string(),
            details: serde_json::to_value(errors).ok(),
        }
    }

    pub fn session_not_found(id: SessionId) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("Session not found: {}", id),
            details: Some(serde_json::json!({ "session_id": id.value() })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Render a response shape: 400, 404, 200 or 201 with `Location`.
pub fn render<T: Serialize>(shape: ResponseShape<T>) -> Response {
    match shape {
        ResponseShape::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        ResponseShape::Created { location, body } => (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(body),
        )
            .into_response(),
        ResponseShape::BadRequest(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&errors)),
        )
            .into_response(),
        ResponseShape::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::session_not_found(id)),
        )
            .into_response(),
    }
}

/// Render a handler result; store failures become 500.
pub fn render_result<T: Serialize>(result: Result<ResponseShape<T>, DomainError>) -> Response {
    match result {
        Ok(shape) => render(shape),
        Err(err) => {
            tracing::error!(code = %err.code, "session store failure: {}", err.message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(err.message)),
            )
                .into_response()
        }
    }
}

/// Parse a session id path segment, reporting failures under `field`.
pub fn parse_session_id(raw: &str, field: &str) -> Result<SessionId, ValidationErrors> {
    raw.parse::<SessionId>().map_err(|e| {
        ValidationErrors::from(ValidationError::invalid_format(field, e.to_string()))
    })
}

/// A body that could not be read as JSON counts as a failed validation.
pub fn rejection_errors(rejection: JsonRejection) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("body", rejection.body_text());
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_maps_to_200() {
        let response = render(ResponseShape::Ok(vec![1, 2, 3]));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn created_maps_to_201_with_location() {
        let response = render(ResponseShape::Created {
            location: "/api/ideas/forsession/1".to_string(),
            body: "created",
        });
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/ideas/forsession/1"
        );
    }

    #[test]
    fn bad_request_maps_to_400() {
        let errors = ValidationErrors::from(ValidationError::required("name"));
        let response = render::<()>(ResponseShape::BadRequest(errors));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = render::<()>(ResponseShape::NotFound(SessionId::new(123)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = DomainError::new(
            crate::domain::foundation::ErrorCode::DatabaseError,
            "store unavailable",
        );
        let response = render_result::<()>(Err(err));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_body_carries_identifier() {
        let body = ErrorResponse::session_not_found(SessionId::new(123));
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.details, Some(serde_json::json!({ "session_id": 123 })));
    }

    #[test]
    fn validation_body_lists_fields() {
        let errors = ValidationErrors::from(ValidationError::required("name"));
        let body = ErrorResponse::validation(&errors);
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(
            body.details,
            Some(serde_json::json!({ "name": ["Field 'name' is required"] }))
        );
    }

    #[test]
    fn parse_session_id_reports_field() {
        assert_eq!(parse_session_id("12", "id"), Ok(SessionId::new(12)));
        let errors = parse_session_id("twelve", "id").unwrap_err();
        assert_eq!(errors.messages_for("id").len(), 1);
    }
}
