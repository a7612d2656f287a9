//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use solar_payback::api::{AppState, router};

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn full_session_walkthrough() {
    let app = router(Arc::new(AppState::new()));

    let (status, created) = call(&app, "POST", "/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 16);

    let (status, view) = call(
        &app,
        "PATCH",
        &format!("/sessions/{id}/snapshot"),
        Some(serde_json::json!({ "service_tier": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["snapshot"]["grid_hours_max"], 20.0);

    for expected in ["generator_details", "usage_pattern"] {
        let (_, next) = call(&app, "POST", &format!("/sessions/{id}/next"), None).await;
        assert_eq!(next["advanced"], true);
        assert_eq!(next["stage"], expected);
    }

    call(
        &app,
        "PATCH",
        &format!("/sessions/{id}/snapshot"),
        Some(serde_json::json!({ "avg_daily_consumption_kwh": 20.0 })),
    )
    .await;

    let (_, last) = call(&app, "POST", &format!("/sessions/{id}/next"), None).await;
    assert_eq!(last["stage"], "results");
    assert!(last["results"].is_object());

    let (status, results) = call(&app, "GET", &format!("/sessions/{id}/results"), None).await;
    assert_eq!(status, StatusCode::OK);
    let daily = results["generator"]["daily_cost"].as_f64().unwrap();
    assert!((daily - 9873.97).abs() < 0.01, "generator daily {daily}");
    assert_eq!(results["solar"]["package"], "MEDIUM");

    let (_, at_end) = call(&app, "POST", &format!("/sessions/{id}/next"), None).await;
    assert_eq!(at_end["advanced"], false);

    let (_, back) = call(&app, "POST", &format!("/sessions/{id}/previous"), None).await;
    assert_eq!(back["stage"], "usage_pattern");
    assert!(back["results"].is_null());

    let (status, _) = call(&app, "GET", &format!("/sessions/{id}/results"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, restarted) = call(&app, "POST", &format!("/sessions/{id}/restart"), None).await;
    assert_eq!(restarted["stage"], "tier_selection");
    assert!(restarted["snapshot"]["service_tier"].is_null());
    assert_eq!(restarted["snapshot"]["generator_capacity_kva"], 5.0);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let app = router(Arc::new(AppState::new()));
    let (_, a) = call(&app, "POST", "/sessions", None).await;
    let (_, b) = call(&app, "POST", "/sessions", None).await;
    let a = a["id"].as_str().unwrap().to_string();
    let b = b["id"].as_str().unwrap().to_string();
    assert_ne!(a, b);

    call(
        &app,
        "PATCH",
        &format!("/sessions/{a}/snapshot"),
        Some(serde_json::json!({ "service_tier": "E" })),
    )
    .await;

    let (_, other) = call(&app, "GET", &format!("/sessions/{b}"), None).await;
    assert!(other["snapshot"]["service_tier"].is_null());
}

#[tokio::test]
async fn clearing_tier_blocks_first_stage() {
    let app = router(Arc::new(AppState::new()));
    let (_, created) = call(&app, "POST", "/sessions", None).await;
    let id = created["id"].as_str().unwrap().to_string();

    call(
        &app,
        "PATCH",
        &format!("/sessions/{id}/snapshot"),
        Some(serde_json::json!({ "service_tier": "C" })),
    )
    .await;
    let (_, view) = call(
        &app,
        "PATCH",
        &format!("/sessions/{id}/snapshot"),
        Some(serde_json::json!({ "service_tier": null })),
    )
    .await;
    assert!(view["snapshot"]["service_tier"].is_null());
    assert_eq!(view["can_advance"], false);
}

#[tokio::test]
async fn tables_expose_fuel_rates() {
    let app = router(Arc::new(AppState::new()));
    let (status, tables) = call(&app, "GET", "/tables", None).await;
    assert_eq!(status, StatusCode::OK);
    let rates = tables["fuel_rates"].as_array().unwrap();
    assert_eq!(rates.len(), 8);
    assert_eq!(rates[0]["capacity_kva"], 3);
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let state = Arc::new(AppState::new());
    let app = router(Arc::clone(&state));

    let mut ids = Vec::new();
    for _ in 0..50 {
        let (_, created) = call(&app, "POST", "/sessions", None).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    assert_eq!(state.session_count().unwrap(), 50);

    for id in &ids {
        let (status, _) = call(&app, "DELETE", &format!("/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    assert_eq!(state.session_count().unwrap(), 0);

    let (status, _) = call(&app, "GET", &format!("/sessions/{}", ids[0]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, "POST", &format!("/sessions/{}/next", ids[0]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
