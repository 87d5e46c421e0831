//! End-to-end API tests: ingest records, then read the dashboard payload.
//! Run: cargo test -p dashboard-server --test dashboard_api

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use dashboard_server::{Config, MemoryStore, Server, ServerState};
use shared::util::now_millis;

fn test_config() -> Config {
    Config {
        http_port: 0,
        timezone: chrono_tz::Asia::Kolkata,
        environment: "test".into(),
        log_level: "info".into(),
        log_dir: None,
        seed_file: None,
    }
}

fn app() -> Router {
    let state = ServerState::new(test_config(), Arc::new(MemoryStore::new()));
    Server::build_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["timezone"], "Asia/Kolkata");
}

#[tokio::test]
async fn test_unknown_creator_gets_empty_payload() {
    let app = app();
    let (status, body) = get(&app, "/api/dashboard/nobody").await;

    // Never an error, always a renderable payload
    assert_eq!(status, StatusCode::OK);

    for period in ["today", "week", "month", "all-time"] {
        assert_eq!(body["stats"][period]["earnings"], 0.0, "{period}");
        assert_eq!(body["stats"][period]["supporters"], 0, "{period}");
        assert_eq!(body["stats"][period]["campaigns"], 0, "{period}");
        assert_eq!(body["stats"][period]["earningsChange"], 0, "{period}");
    }

    let hourly = body["chartData"]["hourly"].as_array().unwrap();
    assert_eq!(hourly.len(), 24);
    assert_eq!(hourly[0]["label"], "00:00");
    assert_eq!(hourly[23]["label"], "23:00");

    assert_eq!(body["chartData"]["daily"].as_array().unwrap().len(), 30);
    assert_eq!(body["chartData"]["monthly"].as_array().unwrap().len(), 12);
    assert_eq!(body["activities"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_ingest_then_dashboard_flow() {
    let app = app();
    let now = now_millis();

    // Creator profile
    let (status, user) = post(&app, "/api/users", json!({"username": "asha", "name": "Asha"})).await;
    assert_eq!(status, StatusCode::OK);
    let creator_id = user["id"].as_i64().unwrap();

    // One active campaign
    let (status, campaign) = post(
        &app,
        "/api/campaigns",
        json!({"creator_id": creator_id, "title": "Chai for Open Source"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(campaign["status"], "active");

    // Two settled payments and one still pending. Same timestamp, so the
    // activity feed falls back to insertion order, newest path first.
    let (status, _) = post(
        &app,
        "/api/payments",
        json!({
            "to_user": "asha",
            "name": "Mira",
            "email": "mira@example.com",
            "amount": 200,
            "status": "success",
            "campaign_title": "Chai for Open Source",
            "created_at": now
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, paid) = post(
        &app,
        "/api/payments",
        json!({"to_user": "asha", "name": "Ravi", "amount": 100, "done": true, "created_at": now}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["to_user"], "asha");
    assert!(paid["id"].as_i64().unwrap() > 0);

    let (status, _) = post(
        &app,
        "/api/payments",
        json!({"to_user": "asha", "name": "Late", "amount": 999, "created_at": now}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The aggregated dashboard
    let (status, body) = get(&app, "/api/dashboard/asha").await;
    assert_eq!(status, StatusCode::OK);

    // Pending ₹999 must not count anywhere
    assert_eq!(body["stats"]["today"]["earnings"], 300.0);
    assert_eq!(body["stats"]["today"]["supporters"], 2);
    assert_eq!(body["stats"]["today"]["avgDonation"], 150.0);
    assert_eq!(body["stats"]["today"]["earningsChange"], 100);

    assert_eq!(body["stats"]["week"]["earnings"], 300.0);
    assert_eq!(body["stats"]["all-time"]["earnings"], 300.0);
    assert_eq!(body["stats"]["all-time"]["earningsChange"], 100);

    // Campaign snapshot is period-independent
    for period in ["today", "week", "month", "all-time"] {
        assert_eq!(body["stats"][period]["campaigns"], 1, "{period}");
        assert_eq!(body["stats"][period]["campaignsChange"], 0, "{period}");
    }

    let hourly_total: f64 = body["chartData"]["hourly"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["amount"].as_f64().unwrap())
        .sum();
    assert_eq!(hourly_total, 300.0);

    let daily = body["chartData"]["daily"].as_array().unwrap();
    assert_eq!(daily[29]["amount"], 300.0);
    let monthly = body["chartData"]["monthly"].as_array().unwrap();
    assert_eq!(monthly[11]["amount"], 300.0);

    let activity = body["activities"].as_array().unwrap();
    assert_eq!(activity.len(), 2);
    assert_eq!(
        activity[0]["text"],
        "Mira supported your campaign \"Chai for Open Source\" with \u{20b9}200"
    );
    assert_eq!(
        activity[1]["text"],
        "Ravi supported your campaign with \u{20b9}100"
    );
}

#[tokio::test]
async fn test_payment_rejects_bad_amount() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/payments",
        json!({"to_user": "asha", "amount": -5.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn test_campaign_requires_known_creator() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/campaigns",
        json!({"creator_id": 424242, "title": "Orphan"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_user_upsert_requires_username() {
    let app = app();

    let (status, body) = post(&app, "/api/users", json!({"username": "  "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response.headers().get("x-request-id");
    assert!(request_id.is_some());
    assert!(!request_id.unwrap().to_str().unwrap().is_empty());
}
