//! # Error Types
//!
//! Domain-specific error types for solar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  solar-core (this file)                                                │
//! │  ├── FieldError   - One field/message pair (a normal return value)     │
//! │  └── CoreError    - Raised when invalid data reaches an operation      │
//! │                                                                         │
//! │  solar-api (separate crate)                                            │
//! │  └── ApiError     - What the storefront sees (status + JSON body)      │
//! │                                                                         │
//! │  Flow: Vec<FieldError> → CoreError → ApiError → HTTP 400              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation never fails fast: every violated rule yields a `FieldError`
//! 3. Errors carry the full list, the caller decides how to present it

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Field Error
// =============================================================================

/// A single field-level validation failure.
///
/// `field` uses the wire (camelCase) name so the storefront can attach the
/// message to the matching form control.
///
/// ```json
/// { "field": "monthlyBill", "message": "กรุณากรอกค่าไฟฟ้าที่มากกว่า 0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,

    /// User-facing message (Thai).
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Validation results are plain `Vec<FieldError>` values. A `CoreError` only
/// appears when data that fails those rules is handed to an operation that
/// needs it valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Calculator input failed validation.
    ///
    /// ## When This Occurs
    /// - `SolarCalculator::calculate_request` was called without validating
    /// - `CalculatorInput::new` / `TryFrom<&CalculatorRequest>` rejected the data
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<FieldError>),

    /// Lead form failed validation.
    #[error("Invalid lead: {}", join_messages(.0))]
    InvalidLead(Vec<FieldError>),
}

impl CoreError {
    /// Returns the underlying field errors.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CoreError::InvalidInput(errors) | CoreError::InvalidLead(errors) => errors,
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_joins_all_errors() {
        let err = CoreError::InvalidInput(vec![
            FieldError::new("monthlyBill", "bill too low"),
            FieldError::new("dayNightRatio", "ratio out of range"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid input: bill too low, ratio out of range"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("phone", "invalid");
        assert_eq!(err.to_string(), "phone: invalid");
    }

    #[test]
    fn test_field_error_serializes_flat() {
        let err = FieldError::new("email", "required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "email");
        assert_eq!(json["message"], "required");
    }
}
