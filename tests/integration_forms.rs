mod common;

use axum::http::StatusCode;
use common::{login, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_classroom_form() {
    let app = setup_test_app();
    let token = login(app.clone(), "admin", &["admin_classrooms"], &[]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/classroom",
        Some(&token),
        Some(json!({
            "id": 14,
            "name": "9A",
            "grade": 9,
            "letter": "A",
            "school": { "id": 3, "name": "School No. 12" },
            "shift": { "id": 1, "name": "Morning" },
            "teacher": { "id": 8, "first_name": "Asel", "last_name": "Nurova" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["school_id"], 3);
    assert_eq!(body["shift_id"], 1);
    assert_eq!(body["teacher_id"], 8);
    assert!(body["language_id"].is_null());
    assert_eq!(body["label"], "9A");
    assert_eq!(body["teacher_name"], "Nurova Asel");
}

#[tokio::test]
async fn test_timetable_form_and_grid() {
    let app = setup_test_app();
    let token = login(app.clone(), "teacher", &["timetable"], &[]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/timetable",
        Some(&token),
        Some(json!({
            "classroom": { "id": 14, "name": "9A" },
            "shift": { "id": 1, "name": "Morning" },
            "lessons": [
                { "id": 2, "day": 1, "lesson_number": 2,
                  "subject": { "id": 5, "name": "Physics" }, "cabinet": "" },
                { "id": 1, "day": 0, "lesson_number": 1,
                  "subject": { "id": 4, "name": "Algebra" },
                  "teacher": { "id": 8, "first_name": "Asel", "last_name": "Nurova" },
                  "cabinet": "204" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let cells = body["form"]["cells"].as_array().unwrap();
    assert_eq!(cells[0]["subject_id"], 4);
    assert_eq!(cells[0]["cabinet"], "204");
    assert!(cells[1]["cabinet"].is_null());

    let grid = body["grid"].as_array().unwrap();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0][0]["teacher_id"], 8);
    assert_eq!(grid[1][1]["subject_id"], 5);
    assert!(grid[0][1].is_null());
}

#[tokio::test]
async fn test_user_form() {
    let app = setup_test_app();
    let token = login(app.clone(), "operator", &["users"], &["users"]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/user",
        Some(&token),
        Some(json!({
            "id": 31,
            "first_name": "Timur",
            "last_name": "Akhmetov",
            "birth_date": "2009-03-07",
            "roles": [{ "id": 7, "name": "student" }],
            "classroom": { "id": 14, "name": "9A" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["birth_date"], "2009-03-07");
    assert_eq!(body["roles"], json!(["student"]));
    assert_eq!(body["classroom_id"], 14);
    assert_eq!(body["email"], "");
    assert_eq!(body["full_name"], "Akhmetov Timur");
}

#[tokio::test]
async fn test_report_form() {
    let app = setup_test_app();
    let token = login(app.clone(), "principal", &["reports"], &[]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/report",
        Some(&token),
        Some(json!({
            "id": 4,
            "period": { "year": 2026, "quarter": 1 },
            "sections": [
                { "title": "Staff", "questions": [
                    { "id": 10, "title": "Teachers", "answer": "54" },
                    { "id": 11, "title": "Vacancies" }
                ]}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["answers"], json!({ "10": "54", "11": "" }));
    assert_eq!(body["form"]["quarter"], 1);
    assert_eq!(body["question_count"], 2);
    assert_eq!(body["answered_count"], 1);
}

#[tokio::test]
async fn test_forms_require_permission() {
    let app = setup_test_app();
    let token = login(app.clone(), "teacher", &["admin_classrooms"], &[]).await;

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/forms/classroom",
        Some(&token),
        Some(json!({ "id": 14, "name": "9A" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. Missing read permission on admin_classrooms"
    );

    let (status, _) = send(
        app,
        "POST",
        "/api/forms/classroom",
        None,
        Some(json!({ "id": 14, "name": "9A" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_field_type_returns_json_error() {
    let app = setup_test_app();
    let token = login(app.clone(), "admin", &["admin_classrooms"], &[]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/classroom",
        Some(&token),
        Some(json!({ "id": "x", "name": "9A" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid field type in request");
}

#[tokio::test]
async fn test_missing_field_returns_json_error() {
    let app = setup_test_app();
    let token = login(app.clone(), "teacher", &["timetable"], &[]).await;

    let (status, body) = send(
        app,
        "POST",
        "/api/forms/timetable",
        Some(&token),
        Some(json!({ "lessons": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "classroom is required");
}
