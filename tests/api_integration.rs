//! End-to-end API integration tests
//!
//! These tests verify the HTTP flows for entity creation and the
//! relationship queries, driving the router through `oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt; // for oneshot

use common::{create_mentor, create_student, send_json, setup_app};

#[tokio::test]
async fn test_index_returns_liveness_text() {
    let app = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Student Mentor Service");
}

#[tokio::test]
async fn test_create_mentor_returns_generated_id() {
    let app = setup_app();

    let payload = json!({
        "name": "Grace",
        "email": "grace@example.com",
        "expertise": ["rust", "databases"]
    });
    let (status, body) = send_json(&app, "POST", "/mentors", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string());
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["expertise"], json!(["rust", "databases"]));
    assert_eq!(body["students"], json!([]));
}

#[tokio::test]
async fn test_create_mentor_without_expertise_defaults_to_empty() {
    let app = setup_app();

    let payload = json!({ "name": "Grace", "email": "grace@example.com" });
    let (status, body) = send_json(&app, "POST", "/mentors", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expertise"], json!([]));
}

#[tokio::test]
async fn test_create_student_returns_generated_id() {
    let app = setup_app();

    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "age": 17,
        "standard": "11th"
    });
    let (status, body) = send_json(&app, "POST", "/students", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string());
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["age"], 17);
    assert_eq!(body["standard"], "11th");
    assert_eq!(body["mentor"], json!(null));
}

#[tokio::test]
async fn test_create_mentor_duplicate_email_fails() {
    let app = setup_app();

    create_mentor(&app, "Grace", "grace@example.com").await;

    let payload = json!({ "name": "Other", "email": "grace@example.com" });
    let (status, body) = send_json(&app, "POST", "/mentors", Some(&payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_student_duplicate_email_fails() {
    let app = setup_app();

    create_student(&app, "Ada", "ada@example.com").await;

    let payload = json!({ "name": "Other", "email": "ada@example.com" });
    let (status, _) = send_json(&app, "POST", "/students", Some(&payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_mentor_invalid_email_fails() {
    let app = setup_app();

    let payload = json!({ "name": "Grace", "email": "not-an-email" });
    let (status, _) = send_json(&app, "POST", "/mentors", Some(&payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_student_missing_required_field_is_rejected() {
    let app = setup_app();

    // No email: the JSON extractor rejects the body before the handler runs
    let payload = json!({ "name": "Ada" });
    let (status, _) = send_json(&app, "POST", "/students", Some(&payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_students_empty_for_fresh_mentor() {
    let app = setup_app();

    let mentor = create_mentor(&app, "Grace", "grace@example.com").await;
    let mentor_id = mentor["id"].as_str().unwrap();

    let uri = format!("/mentors/{}/students", mentor_id);
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_students_unknown_mentor_not_found() {
    let app = setup_app();

    let uri = format!("/mentors/{}/students", uuid::Uuid::new_v4());
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Mentor not found");
}

#[tokio::test]
async fn test_get_mentor_unknown_student_not_found() {
    let app = setup_app();

    let uri = format!("/students/{}/mentor", uuid::Uuid::new_v4());
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_get_mentor_for_unmentored_student_is_distinct_variant() {
    let app = setup_app();

    let student = create_student(&app, "Ada", "ada@example.com").await;
    let student_id = student["id"].as_str().unwrap();

    let uri = format!("/students/{}/mentor", student_id);
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    // Same status as an unknown student, but a distinguishable message
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student has no mentor");
}

#[tokio::test]
async fn test_get_student_mentor_after_assignment() {
    let app = setup_app();

    let mentor = create_mentor(&app, "Grace", "grace@example.com").await;
    let student = create_student(&app, "Ada", "ada@example.com").await;
    let mentor_id = mentor["id"].as_str().unwrap();
    let student_id = student["id"].as_str().unwrap();

    let uri = format!("/mentors/{}/students/{}", mentor_id, student_id);
    let (status, _) = send_json(&app, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/students/{}/mentor", student_id);
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], mentor_id);
    assert_eq!(body["email"], "grace@example.com");
}

#[tokio::test]
async fn test_list_students_returns_full_records() {
    let app = setup_app();

    let mentor = create_mentor(&app, "Grace", "grace@example.com").await;
    let student = create_student(&app, "Ada", "ada@example.com").await;
    let mentor_id = mentor["id"].as_str().unwrap();
    let student_id = student["id"].as_str().unwrap();

    let uri = format!("/mentors/{}/students/{}", mentor_id, student_id);
    let (status, _) = send_json(&app, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/mentors/{}/students", mentor_id);
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], student_id);
    assert_eq!(students[0]["name"], "Ada");
    assert_eq!(students[0]["mentor"], mentor_id);
}

#[tokio::test]
async fn test_malformed_path_id_is_rejected() {
    let app = setup_app();

    let (status, _) = send_json(&app, "GET", "/mentors/not-a-uuid/students", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
