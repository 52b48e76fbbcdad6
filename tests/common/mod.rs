//! Shared test fixtures
//!
//! The handlers depend on the repository ports, so the tests drive the
//! full router against in-memory implementations instead of a live
//! MongoDB.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

use mentorship_api::api::{self, state::AppState};
use mentorship_api::domain::mentor::Mentor;
use mentorship_api::domain::repositories::{
    MentorRepository, RepositoryError, StudentRepository,
};
use mentorship_api::domain::student::Student;

/// In-memory MentorRepository with unique-email enforcement
#[derive(Default)]
pub struct InMemoryMentorRepository {
    mentors: Mutex<Vec<Mentor>>,
}

#[async_trait]
impl MentorRepository for InMemoryMentorRepository {
    async fn insert(&self, mentor: &Mentor) -> Result<(), RepositoryError> {
        let mut mentors = self.mentors.lock().unwrap();

        if mentors.iter().any(|m| m.email() == mentor.email()) {
            return Err(RepositoryError::DuplicateEmail(mentor.email().to_string()));
        }

        mentors.push(mentor.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>, RepositoryError> {
        let mentors = self.mentors.lock().unwrap();
        Ok(mentors.iter().find(|m| m.id() == id).cloned())
    }

    async fn save(&self, mentor: &Mentor) -> Result<(), RepositoryError> {
        let mut mentors = self.mentors.lock().unwrap();

        match mentors.iter_mut().find(|m| m.id() == mentor.id()) {
            Some(slot) => *slot = mentor.clone(),
            None => mentors.push(mentor.clone()),
        }

        Ok(())
    }
}

/// In-memory StudentRepository preserving insertion order
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<Vec<Student>>,
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, student: &Student) -> Result<(), RepositoryError> {
        let mut students = self.students.lock().unwrap();

        if students.iter().any(|s| s.email() == student.email()) {
            return Err(RepositoryError::DuplicateEmail(student.email().to_string()));
        }

        students.push(student.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_unmentored(&self) -> Result<Vec<Student>, RepositoryError> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().filter(|s| !s.has_mentor()).cloned().collect())
    }

    async fn find_first_unmentored(&self) -> Result<Option<Student>, RepositoryError> {
        let students = self.students.lock().unwrap();
        Ok(students
            .iter()
            .filter(|s| !s.has_mentor())
            .min_by_key(|s| s.created_at())
            .cloned())
    }

    async fn save(&self, student: &Student) -> Result<(), RepositoryError> {
        let mut students = self.students.lock().unwrap();

        match students.iter_mut().find(|s| s.id() == student.id()) {
            Some(slot) => *slot = student.clone(),
            None => students.push(student.clone()),
        }

        Ok(())
    }
}

/// Setup test application with in-memory repositories
pub fn setup_app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryMentorRepository::default()),
        Arc::new(InMemoryStudentRepository::default()),
    );

    api::router(state)
}

/// Send a request through the router and decode the JSON response body
///
/// Returns `Value::Null` for empty bodies.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(payload).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Create a mentor via the API and return the response body
pub async fn create_mentor(app: &Router, name: &str, email: &str) -> Value {
    let payload = json!({ "name": name, "email": email, "expertise": ["testing"] });
    let (status, body) = send_json(app, "POST", "/mentors", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK, "mentor creation failed: {}", body);
    body
}

/// Create a student via the API and return the response body
pub async fn create_student(app: &Router, name: &str, email: &str) -> Value {
    let payload = json!({ "name": name, "email": email });
    let (status, body) = send_json(app, "POST", "/students", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK, "student creation failed: {}", body);
    body
}
