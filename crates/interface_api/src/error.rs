//! API error handling
//!
//! Every error the API emits uses the same structured payload: timestamp,
//! status, error, message, path. For inbound field-validation failures the
//! message is the constant `"Validation failed"` and `path` carries the list
//! of individual field error messages; clients depend on that quirk of the
//! wire format, so it is preserved as is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use core_kernel::StoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation { errors: Vec<String> },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Uniform error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// ISO-8601 moment the error was produced
    pub timestamp: String,
    /// HTTP status code
    pub status: u16,
    /// HTTP reason phrase
    pub error: String,
    /// Human-readable description
    pub message: String,
    /// Field error list for validation failures, empty otherwise
    pub path: String,
}

impl ApiError {
    /// Collects every field message out of a validator error tree
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut messages = Vec::new();
        flatten_errors("", errors, &mut messages);
        messages.sort();
        ApiError::Validation { errors: messages }
    }
}

fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{name}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(&name, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(&format!("{name}[{index}]"), nested, out);
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, path) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, String::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, String::new()),
            ApiError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                format!("[{}]", errors.join(", ")),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, String::new()),
        };

        let body = ErrorResponse {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
            path,
        };

        (status, Json(body)).into_response()
    }
}

/// Storage conflicts (the schema-level unique-email backstop among them)
/// surface as 409; every other engine fault is a 500.
impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        if error.is_conflict() {
            ApiError::Conflict(error.to_string())
        } else {
            ApiError::Internal(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "email must be a well-formed address"))]
        email: String,
        #[validate(length(min = 1, message = "last name must not be blank"))]
        last_name: String,
    }

    #[test]
    fn test_from_validation_collects_messages() {
        let probe = Probe {
            email: "not-an-email".to_string(),
            last_name: String::new(),
        };
        let errors = probe.validate().unwrap_err();

        let api_error = ApiError::from_validation(&errors);
        let ApiError::Validation { errors } = api_error else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("email:"));
        assert!(errors[1].starts_with("last_name:"));
    }

    #[test]
    fn test_store_error_mapping() {
        let conflict: ApiError = StoreError::conflict("duplicate email").into();
        assert!(matches!(conflict, ApiError::Conflict(_)));

        let internal: ApiError = StoreError::internal("boom").into();
        assert!(matches!(internal, ApiError::Internal(_)));
    }
}
