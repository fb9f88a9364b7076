//! # Lead Endpoints
//!
//! `POST /api/leads` accepts the contact form shown under a calculator
//! result. `GET /api/leads/{id}` reads an accepted lead back.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Map, Value};
use solar_core::lead::fields;
use solar_core::{Lead, LeadForm};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Reads the lead form out of a JSON object body.
///
/// Field types are not enforced here: a numeric phone becomes its digits and
/// any other non-string value is read as its JSON text before the form rules
/// run. Absent and null fields read as empty.
pub fn parse_lead_form(body: &[u8]) -> ApiResult<LeadForm> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidLeadBody(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(ApiError::InvalidLeadBody("expected a JSON object".to_string()));
    };

    Ok(LeadForm {
        full_name: text_field(&map, fields::FULL_NAME),
        phone: text_field(&map, fields::PHONE),
        email: text_field(&map, fields::EMAIL),
    })
}

fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `POST /api/leads`
pub async fn submit_lead_handler(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let form = parse_lead_form(&body)?;
    let lead = Lead::from_form(&form, Utc::now())?;

    let inbox_size = state.leads.push(lead.clone()).await;
    info!(
        lead_id = %lead.id,
        created_at = %lead.created_at,
        inbox_size,
        "Lead received"
    );

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "data": lead }))).into_response())
}

/// `GET /api/leads/{id}`
pub async fn get_lead_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let lead = state
        .leads
        .get(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Lead not found: {}", id)))?;

    Ok(Json(json!({ "success": true, "data": lead })).into_response())
}
