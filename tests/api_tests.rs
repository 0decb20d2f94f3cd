use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tick_wheel::{create_router, Offset, ServerState, TickWheel, WheelConfig};

fn app() -> Router {
    let wheel = TickWheel::new(WheelConfig::default());
    let state = Arc::new(ServerState::new(wheel, 20554, "127.0.0.1".to_string()));
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn point(offset: Offset) -> Value {
    json!({ "x": offset.x, "y": offset.y })
}

/// Drag from just past the seam to three units into the minute
async fn dial_three_seconds(app: &Router) {
    let start = Offset::from_polar(100.0, -179.5);
    let target = Offset::from_polar(100.0, -159.0);

    let (status, body) = send(app, "POST", "/drag/start", Some(point(start))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "dragging");

    let (status, body) = send(app, "POST", "/drag/move", Some(point(target - start))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wheel"]["total_seconds"], 3);

    let (status, body) = send(app, "POST", "/drag/end", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn fresh_wheel_status_is_idle_at_zero() {
    let app = app();
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wheel"]["total_seconds"], 0);
    assert_eq!(body["wheel"]["time"], "00:00");
    assert_eq!(body["wheel"]["phase"], "idle");
    assert!(body["wheel"]["needle"].is_null());
    assert_eq!(body["host"], "127.0.0.1");
}

#[tokio::test(start_paused = true)]
async fn dial_and_count_down_to_zero() {
    let app = app();
    dial_three_seconds(&app).await;

    let (status, body) = send(&app, "POST", "/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["message"], "Countdown started");

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["wheel"]["time"], "00:02");
    assert!(body["wheel"]["is_running"].as_bool().unwrap());

    tokio::time::sleep(Duration::from_secs(3)).await;
    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["wheel"]["total_seconds"], 0);
    assert_eq!(body["wheel"]["phase"], "idle");
    assert!(body["wheel"]["needle"].is_null());
}

#[tokio::test(start_paused = true)]
async fn toggle_pauses_and_keeps_remaining_time() {
    let app = app();
    dial_three_seconds(&app).await;

    send(&app, "POST", "/toggle", None).await;
    let (_, body) = send(&app, "POST", "/toggle", None).await;
    assert_eq!(body["message"], "Countdown paused");

    tokio::time::sleep(Duration::from_secs(5)).await;
    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["wheel"]["total_seconds"], 3);
    assert!(!body["wheel"]["needle"].is_null());
}

#[tokio::test]
async fn toggle_at_zero_does_nothing() {
    let app = app();
    let (status, body) = send(&app, "POST", "/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["message"], "Nothing to count down");
}

#[tokio::test]
async fn out_of_order_drag_events_conflict() {
    let app = app();

    let (status, body) = send(&app, "POST", "/drag/end", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (status, _) = send(&app, "POST", "/drag/move", Some(json!({ "x": 1.0, "y": 0.0 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn malformed_points_are_rejected() {
    let app = app();
    let (status, _) = send(&app, "POST", "/drag/start", Some(json!({ "x": 1.0 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
