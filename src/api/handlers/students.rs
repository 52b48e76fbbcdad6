use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::handlers::mentors::MentorResponse;
use crate::api::state::AppState;
use crate::domain::student::Student;
use crate::domain::value_objects::Email;

/// Request body for creating a student
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub standard: Option<String>,
}

/// Student representation returned by the API
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub standard: Option<String>,
    pub mentor: Option<Uuid>,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().to_string(),
            email: student.email().to_string(),
            age: student.age(),
            standard: student.standard().map(str::to_string),
            mentor: student.mentor(),
        }
    }
}

/// Create a new student
///
/// POST /students
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create student: {}", e)))?;

    let student = Student::new(req.name, email, req.age, req.standard)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create student: {}", e)))?;

    state
        .students
        .insert(&student)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create student: {}", e)))?;

    Ok(Json(StudentResponse::from(&student)))
}

/// Show the mentor assigned to a student
///
/// GET /students/:studentId/mentor
pub async fn get_student_mentor(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<MentorResponse>, ApiError> {
    let student = state
        .students
        .find_by_id(student_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let mentor_id = student
        .mentor()
        .ok_or_else(|| ApiError::not_found("Student has no mentor"))?;

    // A dangling reference reads the same as having no mentor
    let mentor = state
        .mentors
        .find_by_id(mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student has no mentor"))?;

    Ok(Json(MentorResponse::from(&mentor)))
}
