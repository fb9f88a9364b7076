//! # Calculator Endpoints
//!
//! `POST /api/calculator` sizes a system, `GET /api/calculator` describes
//! the request and response shapes.
//!
//! ## Request Pipeline
//! ```text
//! bytes ──► JSON object? ──► required keys? ──► coerce ──► validate ──► size
//!              │ no              │ no                          │ errors
//!              ▼                 ▼                             ▼
//!        400 Invalid        400 Missing                   400 Validation
//!        request body       required fields               failed
//! ```

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use solar_core::validation::fields;
use solar_core::CalculatorRequest;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `POST /api/calculator`
pub async fn calculate_handler(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let request = parse_calculator_request(&body)?;
    let result = state.calculator.calculate_request(&request)?;

    let finite = result.recommended_capacity.is_finite()
        && result.payback_period.map_or(true, f64::is_finite);
    if !finite {
        return Err(ApiError::Internal(format!(
            "non-finite calculation result for {:?}",
            request
        )));
    }

    debug!(
        location = %request.location_type,
        monthly_bill = request.monthly_bill,
        capacity_kw = result.recommended_capacity,
        "Calculated system size"
    );

    Ok((StatusCode::OK, Json(json!({ "success": true, "data": result }))).into_response())
}

/// `GET /api/calculator`
pub async fn describe_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Solar Calculator API",
        "description": "Use POST method to calculate solar system specifications",
        "endpoint": "/api/calculator",
        "method": "POST",
        "requiredFields": {
            "locationType": "residential | commercial | industrial",
            "monthlyBill": "number (THB)",
            "electricSystem": "single-phase | three-phase",
            "dayNightRatio": "number (0-100)",
        },
        "responseFields": {
            "recommendedCapacity": "number (kW)",
            "estimatedCost": "number (THB)",
            "paybackPeriod": "number (years) | null",
            "monthlySavings": "number (THB)",
        },
    }))
}

// =============================================================================
// Body Parsing
// =============================================================================

/// Turns a raw body into a [`CalculatorRequest`].
///
/// Numbers may arrive as JSON numbers or numeric strings, `null` counts as
/// 0. Anything else becomes NaN and is rejected later by validation.
///
/// A numeric key is missing only when absent. An enum key is also missing
/// when it holds `null`, `false`, `0` or `""`.
pub fn parse_calculator_request(body: &[u8]) -> ApiResult<CalculatorRequest> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(map) = value else {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    };

    // Enum keys must be truthy; numeric keys only need to be present
    let has_text = |key: &str| map.get(key).is_some_and(|v| !is_falsy(v));
    let has_value = |key: &str| map.contains_key(key);

    let complete = has_text(fields::LOCATION_TYPE)
        && has_value(fields::MONTHLY_BILL)
        && has_text(fields::ELECTRIC_SYSTEM)
        && has_value(fields::DAY_NIGHT_RATIO);
    if !complete {
        return Err(ApiError::MissingFields);
    }

    Ok(CalculatorRequest {
        location_type: text_field(&map, fields::LOCATION_TYPE),
        monthly_bill: number_field(&map, fields::MONTHLY_BILL),
        electric_system: text_field(&map, fields::ELECTRIC_SYSTEM),
        day_night_ratio: number_field(&map, fields::DAY_NIGHT_RATIO),
    })
}

fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn number_field(map: &Map<String, Value>, key: &str) -> f64 {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        Some(Value::Null) => 0.0,
        _ => f64::NAN,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
