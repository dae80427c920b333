use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validation_mapping::collect_field_violations;
use crate::domain::RepositoryError;

/// A single request-field violation, reported together with every other
/// violation on the same request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Uniform error envelope for non-field-specific failures.
///
/// `statusCode` is a symbolic code, not a numeric HTTP status; `path` carries
/// the request path in `uri=<path>` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: String,
    pub message: String,
    pub path: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected request, e.g. a lookup for an id that does not exist. Raised by
    /// the handlers, which know the request path; mapped to 400 with an
    /// [`ApiError`] body. The historical contract maps "not found" here rather
    /// than to 404.
    #[error("{message}")]
    InvalidRequest { message: String, path: String },

    /// One or more request fields failed validation; mapped to 400 with a
    /// field -> message object body.
    #[error("request validation failed")]
    Validation { violations: Vec<FieldViolation> },

    /// Unrecoverable failure; mapped to 500 with no internal detail exposed.
    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    pub fn invalid_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn missing_field(field: &str, message: &str) -> Self {
        Self::Validation {
            violations: vec![FieldViolation {
                field: field.to_string(),
                message: message.to_string(),
            }],
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { .. } | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidRequest { message, path } => {
                HttpResponse::build(self.status_code()).json(ApiError {
                    status_code: "INVALID_REQUEST".to_string(),
                    message: message.clone(),
                    path: format!("uri={path}"),
                })
            }
            AppError::Validation { violations } => {
                let mut body = serde_json::Map::new();
                for violation in violations {
                    body.insert(
                        violation.field.clone(),
                        serde_json::Value::String(violation.message.clone()),
                    );
                }
                HttpResponse::build(self.status_code()).json(body)
            }
            AppError::Internal(source) => {
                tracing::error!(error = %source, "unhandled internal error");
                HttpResponse::build(self.status_code())
                    .json(serde_json::json!({ "error": "Internal server error" }))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut violations = collect_field_violations(&err);
        violations.sort_by(|left, right| left.field.cmp(&right.field));
        AppError::Validation { violations }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
