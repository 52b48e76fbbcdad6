use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::handlers::students::StudentResponse;
use crate::api::state::AppState;
use crate::domain::mentor::Mentor;
use crate::domain::value_objects::Email;

/// Request body for creating a mentor
#[derive(Debug, Deserialize)]
pub struct CreateMentorRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// Mentor representation returned by the API
#[derive(Debug, Serialize)]
pub struct MentorResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub students: Vec<Uuid>,
}

impl From<&Mentor> for MentorResponse {
    fn from(mentor: &Mentor) -> Self {
        Self {
            id: mentor.id(),
            name: mentor.name().to_string(),
            email: mentor.email().to_string(),
            expertise: mentor.expertise().to_vec(),
            students: mentor.students().to_vec(),
        }
    }
}

/// Create a new mentor
///
/// POST /mentors
pub async fn create_mentor(
    State(state): State<AppState>,
    Json(req): Json<CreateMentorRequest>,
) -> Result<Json<MentorResponse>, ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create mentor: {}", e)))?;

    let mentor = Mentor::new(req.name, email, req.expertise)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create mentor: {}", e)))?;

    state
        .mentors
        .insert(&mentor)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create mentor: {}", e)))?;

    Ok(Json(MentorResponse::from(&mentor)))
}

/// Show all students assigned to a mentor
///
/// GET /mentors/:mentorId/students
pub async fn list_mentor_students(
    State(state): State<AppState>,
    Path(mentor_id): Path<Uuid>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let mentor = state
        .mentors
        .find_by_id(mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    // Expand the reference list; ids whose record no longer exists are skipped
    let mut students = Vec::with_capacity(mentor.students().len());
    for student_id in mentor.students() {
        let student = state
            .students
            .find_by_id(*student_id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

        if let Some(student) = student {
            students.push(StudentResponse::from(&student));
        }
    }

    Ok(Json(students))
}
