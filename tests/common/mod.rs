use axum::body::Body;
use axum::http::{Request, StatusCode};
use emekdep::router::init_router;
use emekdep::state::AppState;
use emekdep_config::{CorsConfig, ShiftDefaults};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        sessions: Default::default(),
        cors_config: CorsConfig::default(),
        shift_defaults: ShiftDefaults::default(),
    };
    init_router(state)
}

/// Sends a request and returns the status with the JSON body (`Null` when empty).
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Logs in with the given role and permission lists, returning the session id.
#[allow(dead_code)]
pub async fn login(app: axum::Router, role: &str, readable: &[&str], writable: &[&str]) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/session",
        None,
        Some(json!({
            "user_id": 12,
            "full_name": "Aigerim Seitkali",
            "school_id": 3,
            "role": role,
            "readable": readable,
            "writable": writable,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "login failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub fn strings(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}
