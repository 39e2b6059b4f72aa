// src/error.rs
use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Classification tag carried by every error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiErrorType {
    Validation,
    Business,
    System,
}

/// Wire body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Input the storage boundary refused. `cause` is the more specific
    /// diagnostic and wins over `message` in the envelope.
    #[error("{message}")]
    Constraint {
        message: String,
        cause: Option<String>,
    },

    #[error("{0}")]
    IllegalArgument(String),

    /// Path exists but not for this HTTP method.
    #[error("{0}")]
    MethodNotAllowed(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn constraint(msg: impl Into<String>, cause: Option<String>) -> Self {
        AppError::Constraint {
            message: msg.into(),
            cause,
        }
    }

    pub fn illegal_argument(msg: impl Into<String>) -> Self {
        AppError::IllegalArgument(msg.into())
    }

    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        AppError::MethodNotAllowed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Status, tag and user-facing message for this failure.
    pub fn classify(&self) -> (StatusCode, ApiErrorType, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorType::Business, msg.clone()),
            AppError::Constraint { message, cause } => (
                StatusCode::BAD_REQUEST,
                ApiErrorType::Business,
                cause.clone().unwrap_or_else(|| message.clone()),
            ),
            AppError::IllegalArgument(msg) => {
                (StatusCode::BAD_REQUEST, ApiErrorType::Business, msg.clone())
            }
            AppError::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiErrorType::Business,
                msg.clone(),
            ),
            AppError::Database(err) => classify_database_error(err),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorType::System,
                msg.clone(),
            ),
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let (status, error_type, message) = self.classify();
        ApiError {
            message,
            status: status.as_u16(),
            error_type,
        }
    }
}

// SQLSTATE class 23 is integrity constraint violation, class 22 is data
// exception (e.g. value too long for VARCHAR(100)).
fn is_constraint_sqlstate(code: Option<&str>) -> bool {
    matches!(code, Some(code) if code.starts_with("23") || code.starts_with("22"))
}

fn classify_database_error(err: &sqlx::Error) -> (StatusCode, ApiErrorType, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, ApiErrorType::Business, err.to_string()),
        sqlx::Error::Database(db_err) if is_constraint_sqlstate(db_err.code().as_deref()) => (
            StatusCode::BAD_REQUEST,
            ApiErrorType::Business,
            db_err.message().to_string(),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::System,
            other.to_string(),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.to_api_error();

        match body.error_type {
            ApiErrorType::System => {
                tracing::error!(error = ?self, status = body.status, "Request failed: {}", body.message)
            }
            _ => tracing::warn!(error = ?self, status = body.status, "Request rejected: {}", body.message),
        }

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let cause = std::error::Error::source(&rejection).map(|source| source.to_string());
        AppError::constraint(rejection.body_text(), cause)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::illegal_argument(rejection.body_text())
    }
}

/// Renders a handler panic as a SYSTEM envelope. Installed through
/// `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(format!("Request handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_business_404() {
        let envelope = AppError::not_found("Product with id 7 not found").to_api_error();

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.error_type, ApiErrorType::Business);
        assert_eq!(envelope.message, "Product with id 7 not found");
    }

    #[test]
    fn constraint_prefers_inner_cause() {
        let err = AppError::constraint(
            "could not save product",
            Some("value too long for type character varying(100)".to_string()),
        );
        let envelope = err.to_api_error();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.error_type, ApiErrorType::Business);
        assert_eq!(envelope.message, "value too long for type character varying(100)");
    }

    #[test]
    fn constraint_without_cause_keeps_outer_message() {
        let envelope = AppError::constraint("title is required", None).to_api_error();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.message, "title is required");
    }

    #[test]
    fn illegal_argument_is_business_400() {
        let envelope = AppError::illegal_argument("product id must not be null").to_api_error();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.error_type, ApiErrorType::Business);
    }

    #[test]
    fn unclassified_failures_are_system_500() {
        let internal = AppError::internal("boom").to_api_error();
        assert_eq!(internal.status, 500);
        assert_eq!(internal.error_type, ApiErrorType::System);

        let pool = AppError::from(sqlx::Error::PoolTimedOut).to_api_error();
        assert_eq!(pool.status, 500);
        assert_eq!(pool.error_type, ApiErrorType::System);
    }

    #[test]
    fn method_not_allowed_is_business_405() {
        let envelope = AppError::method_not_allowed("Method PATCH not allowed").to_api_error();

        assert_eq!(envelope.status, 405);
        assert_eq!(envelope.error_type, ApiErrorType::Business);
    }

    #[test]
    fn system_tag_is_lowercase_on_the_wire() {
        let json = serde_json::to_value(AppError::internal("boom").to_api_error()).unwrap();

        assert_eq!(json["type"], "system");
        assert_eq!(
            serde_json::from_value::<ApiErrorType>(serde_json::json!("validation")).unwrap(),
            ApiErrorType::Validation
        );
    }

    #[derive(Debug)]
    struct DriverError {
        code: &'static str,
        message: &'static str,
    }

    impl std::fmt::Display for DriverError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for DriverError {}

    impl sqlx::error::DatabaseError for DriverError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(std::borrow::Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn driver_error(code: &'static str, message: &'static str) -> AppError {
        AppError::from(sqlx::Error::Database(Box::new(DriverError { code, message })))
    }

    #[test]
    fn database_constraint_uses_driver_message() {
        let too_long = driver_error("22001", "value too long for type character varying(100)")
            .to_api_error();
        assert_eq!(too_long.status, 400);
        assert_eq!(too_long.error_type, ApiErrorType::Business);
        assert_eq!(too_long.message, "value too long for type character varying(100)");

        let not_null = driver_error(
            "23502",
            "null value in column \"title\" violates not-null constraint",
        )
        .to_api_error();
        assert_eq!(not_null.status, 400);
        assert!(not_null.message.starts_with("null value in column"));
    }

    #[test]
    fn other_database_errors_are_system_500() {
        let envelope = driver_error("40001", "could not serialize access").to_api_error();

        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.error_type, ApiErrorType::System);
    }

    #[test]
    fn row_not_found_is_business_404() {
        let envelope = AppError::from(sqlx::Error::RowNotFound).to_api_error();

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.error_type, ApiErrorType::Business);
    }

    #[test]
    fn constraint_sqlstates() {
        assert!(is_constraint_sqlstate(Some("23502")));
        assert!(is_constraint_sqlstate(Some("23505")));
        assert!(is_constraint_sqlstate(Some("22001")));
        assert!(!is_constraint_sqlstate(Some("40001")));
        assert!(!is_constraint_sqlstate(None));
    }

    #[test]
    fn envelope_serializes_type_tag() {
        let json = serde_json::to_value(AppError::not_found("gone").to_api_error()).unwrap();

        assert_eq!(json["type"], "business");
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"], "gone");
    }

    #[test]
    fn panic_payload_becomes_system_response() {
        let response = handle_panic(Box::new("index out of bounds"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
