//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in solar-api                              │
//! │                                                                         │
//! │  Handler: Result<Response, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Body not JSON? ───────── ApiError::InvalidBody ────────────┐          │
//! │         │                                                    │          │
//! │         ▼                                                    │          │
//! │  Key missing? ─────────── ApiError::MissingFields ──────────┤          │
//! │         │                                                    ▼          │
//! │         ▼                                              IntoResponse     │
//! │  Rule violated? ── CoreError::InvalidInput ── ApiError ──► 400 + JSON   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────► 200/201 + JSON │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront reads `error` as a stable machine string and shows
//! `message` (Thai) to the visitor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use solar_core::validation::fields;
use solar_core::{CoreError, FieldError};

/// Thai messages shown alongside each error category.
pub mod messages {
    /// "Please fill in all fields"
    pub const MISSING_FIELDS: &str = "กรุณากรอกข้อมูลให้ครบถ้วน";
    /// "The data entered is invalid"
    pub const INVALID_DATA: &str = "ข้อมูลที่กรอกไม่ถูกต้อง";
    /// "Calculation failed, please try again"
    pub const INTERNAL: &str = "เกิดข้อผิดพลาดในการคำนวณ กรุณาลองใหม่อีกครั้ง";
    /// "Could not submit, please try again"
    pub const LEAD_INTERNAL: &str = "ไม่สามารถส่งข้อมูลได้ กรุณาลองใหม่อีกครั้ง";
}

/// API error returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Lead body is not a JSON object.
    #[error("Invalid lead body: {0}")]
    InvalidLeadBody(String),

    /// A required calculator key is absent, or an enum key is falsy.
    #[error("Missing required fields")]
    MissingFields,

    /// Calculator rules violated.
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Lead form rules violated.
    #[error("Lead validation failed: {} error(s)", .0.len())]
    LeadValidation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_)
            | ApiError::InvalidLeadBody(_)
            | ApiError::MissingFields
            | ApiError::Validation(_)
            | ApiError::LeadValidation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> Value {
        match self {
            ApiError::InvalidBody(detail) => json!({
                "error": "Invalid request body",
                "message": messages::INVALID_DATA,
                "details": detail,
            }),
            ApiError::InvalidLeadBody(detail) => json!({
                "success": false,
                "error": "Invalid request body",
                "message": messages::INVALID_DATA,
                "details": detail,
            }),
            ApiError::MissingFields => json!({
                "error": "Missing required fields",
                "message": messages::MISSING_FIELDS,
                "details": { "required": fields::REQUIRED },
            }),
            ApiError::Validation(errors) => json!({
                "error": "Validation failed",
                "message": messages::INVALID_DATA,
                "details": errors,
            }),
            ApiError::LeadValidation(errors) => json!({
                "success": false,
                "error": "Validation failed",
                "message": messages::INVALID_DATA,
                "details": errors,
            }),
            ApiError::NotFound(what) => json!({
                "success": false,
                "error": "Not found",
                "message": what,
            }),
            ApiError::Internal(detail) => json!({
                "error": "Internal server error",
                "message": messages::INTERNAL,
                "details": detail,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(errors) => ApiError::Validation(errors),
            CoreError::InvalidLead(errors) => ApiError::LeadValidation(errors),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
