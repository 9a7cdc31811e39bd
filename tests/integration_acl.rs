mod common;

use axum::http::StatusCode;
use common::{send, setup_test_app, strings};
use serde_json::json;

#[tokio::test]
async fn test_resolve_teacher_ability() {
    let app = setup_test_app();
    let (status, body) = send(
        app,
        "POST",
        "/api/acl/abilities",
        None,
        Some(json!({
            "role": "teacher",
            "readable": ["admin_schools", "admin_classrooms", "timetable", "subjects"],
            "writable": ["timetable"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "teacher");
    assert_eq!(
        strings(&body["readable"]),
        vec!["dashboard", "rating", "subjects", "timetable"]
    );
    assert_eq!(strings(&body["writable"]), vec!["profile", "timetable"]);
    assert_eq!(
        strings(&body["denied"]),
        vec!["admin_schools", "admin_classrooms"]
    );
    assert!(!body["rules"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_keeps_every_subject() {
    let app = setup_test_app();
    let (status, body) = send(
        app,
        "POST",
        "/api/acl/abilities",
        None,
        Some(json!({ "role": "admin", "readable": ["admin_schools"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(strings(&body["readable"]).contains(&"admin_schools"));
    assert!(body["denied"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_check_permission() {
    let app = setup_test_app();

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/acl/check",
        None,
        Some(json!({
            "role": "principal",
            "readable": ["admin_schools"],
            "action": "read",
            "subject": "admin_schools"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);

    let (status, body) = send(
        app,
        "POST",
        "/api/acl/check",
        None,
        Some(json!({ "role": "parent", "action": "write", "subject": "profile" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "write");
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_empty_role_is_rejected() {
    let app = setup_test_app();
    let (status, body) = send(
        app,
        "POST",
        "/api/acl/abilities",
        None,
        Some(json!({ "role": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Role must be between 1 and 50 characters");
}
