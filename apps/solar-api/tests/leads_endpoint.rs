mod support;

use solar_api::ApiConfig;
use support::{json, send_raw, spawn_app};

#[tokio::test]
async fn lead_is_accepted_and_readable() {
    let addr = spawn_app(ApiConfig::default()).await;
    let body = r#"{"fullName":"  Somchai Jaidee ","phone":"081-234-5678","email":"somchai@example.com"}"#;

    let (status, resp) = send_raw(addr, "POST", "/api/leads", Some(body)).await;
    assert_eq!(status, 201);
    let created = json(&resp);
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["fullName"], "Somchai Jaidee");
    assert_eq!(created["data"]["phone"], "0812345678");
    assert!(created["data"]["createdAt"].is_string());

    let id = created["data"]["id"].as_str().expect("lead id").to_string();
    let (status, resp) = send_raw(addr, "GET", &format!("/api/leads/{id}"), None).await;
    assert_eq!(status, 200);
    assert_eq!(json(&resp)["data"], created["data"]);
}

#[tokio::test]
async fn invalid_lead_reports_every_field() {
    let addr = spawn_app(ApiConfig::default()).await;
    let body = r#"{"fullName":"J","phone":"123","email":"not-an-email"}"#;

    let (status, resp) = send_raw(addr, "POST", "/api/leads", Some(body)).await;
    assert_eq!(status, 400);
    let json = json(&resp);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Validation failed");

    let fields: Vec<&str> = json["details"]
        .as_array()
        .expect("details array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["fullName", "phone", "email"]);
}

#[tokio::test]
async fn empty_lead_form_is_required_errors() {
    let addr = spawn_app(ApiConfig::default()).await;

    let (status, resp) = send_raw(addr, "POST", "/api/leads", Some("{}")).await;
    assert_eq!(status, 400);
    let json = json(&resp);
    assert_eq!(json["details"][0]["message"], "กรุณากรอกชื่อ-นามสกุล");
    assert_eq!(json["details"][1]["message"], "กรุณากรอกเบอร์โทรศัพท์");
    assert_eq!(json["details"][2]["message"], "กรุณากรอกอีเมล");
}

#[tokio::test]
async fn unknown_lead_is_not_found() {
    let addr = spawn_app(ApiConfig::default()).await;

    let (status, resp) = send_raw(addr, "GET", "/api/leads/does-not-exist", None).await;
    assert_eq!(status, 404);
    assert_eq!(json(&resp)["success"], false);
}

#[tokio::test]
async fn malformed_lead_body_is_rejected() {
    let addr = spawn_app(ApiConfig::default()).await;

    let (status, resp) = send_raw(addr, "POST", "/api/leads", Some("fullName=x")).await;
    assert_eq!(status, 400);
    let json = json(&resp);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn numeric_phone_is_accepted() {
    let addr = spawn_app(ApiConfig::default()).await;
    let body = r#"{"fullName":"Somchai Jaidee","phone":812345678,"email":"somchai@example.com"}"#;

    let (status, resp) = send_raw(addr, "POST", "/api/leads", Some(body)).await;
    assert_eq!(status, 201);
    assert_eq!(json(&resp)["data"]["phone"], "812345678");
}

#[tokio::test]
async fn oldest_lead_is_evicted_at_capacity() {
    let addr = spawn_app(ApiConfig {
        max_leads: 2,
        ..ApiConfig::default()
    })
    .await;

    let mut ids = Vec::new();
    for name in ["First Lead", "Second Lead", "Third Lead"] {
        let body = format!(r#"{{"fullName":"{name}","phone":"0812345678","email":"lead@example.com"}}"#);
        let (status, resp) = send_raw(addr, "POST", "/api/leads", Some(body.as_str())).await;
        assert_eq!(status, 201);
        ids.push(json(&resp)["data"]["id"].as_str().expect("lead id").to_string());
    }

    let (status, _) = send_raw(addr, "GET", &format!("/api/leads/{}", ids[0]), None).await;
    assert_eq!(status, 404);
    for id in &ids[1..] {
        let (status, _) = send_raw(addr, "GET", &format!("/api/leads/{id}"), None).await;
        assert_eq!(status, 200);
    }

    let (_, resp) = send_raw(addr, "GET", "/healthz", None).await;
    assert_eq!(json(&resp)["leadInbox"]["size"], 2);
}
