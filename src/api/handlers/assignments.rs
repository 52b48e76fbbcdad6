use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::handlers::mentors::MentorResponse;
use crate::api::handlers::students::StudentResponse;
use crate::api::state::AppState;

/// Assign a student to a mentor, rejecting duplicate assignments
///
/// PUT /mentors/:mentorId/students/:studentId
pub async fn assign_student(
    State(state): State<AppState>,
    Path((mentor_id, student_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MentorResponse>, ApiError> {
    let mentor = state
        .mentors
        .find_by_id(mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;
    let student = state
        .students
        .find_by_id(student_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let (mut mentor, mut student) = match (mentor, student) {
        (Some(mentor), Some(student)) => (mentor, student),
        _ => return Err(ApiError::not_found("Mentor or student not found")),
    };

    if student.has_mentor() {
        return Err(ApiError::bad_request("Student already has a mentor"));
    }

    if mentor.contains_student(student.id()) {
        return Err(ApiError::bad_request(
            "Student is already assigned to this mentor",
        ));
    }

    mentor.add_student(student.id());
    student.assign_mentor(mentor.id());

    state
        .mentors
        .save(&mentor)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save mentor: {}", e)))?;
    state
        .students
        .save(&student)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save student: {}", e)))?;

    Ok(Json(MentorResponse::from(&mentor)))
}

/// Assign every currently unmentored student to a mentor
///
/// POST /mentors/:mentorId/students
pub async fn bulk_assign_students(
    State(state): State<AppState>,
    Path(mentor_id): Path<Uuid>,
) -> Result<Json<MentorResponse>, ApiError> {
    let mut mentor = state
        .mentors
        .find_by_id(mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    let mut students = state
        .students
        .find_unmentored()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    if students.is_empty() {
        return Err(ApiError::bad_request("No students available"));
    }

    for student in &mut students {
        mentor.add_student(student.id());
        student.assign_mentor(mentor.id());
    }

    state
        .mentors
        .save(&mentor)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save mentor: {}", e)))?;

    // Per-student save failures are logged and skipped, not rolled back;
    // the mentor record keeps the reference either way
    for student in &students {
        if let Err(e) = state.students.save(student).await {
            tracing::warn!("Failed to save student {}: {}", student.id(), e);
        }
    }

    Ok(Json(MentorResponse::from(&mentor)))
}

/// Assign or change the mentor for a particular student
///
/// PUT /students/:studentId/mentor/:mentorId
pub async fn reassign_mentor(
    State(state): State<AppState>,
    Path((student_id, mentor_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = state
        .students
        .find_by_id(student_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;
    let new_mentor = state
        .mentors
        .find_by_id(mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let (mut student, mut new_mentor) = match (student, new_mentor) {
        (Some(student), Some(mentor)) => (student, mentor),
        _ => return Err(ApiError::not_found("Student or mentor not found")),
    };

    // Detach from the prior mentor; skipped silently if its record is gone
    if let Some(prior_id) = student.mentor() {
        let prior = state
            .mentors
            .find_by_id(prior_id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

        if let Some(mut prior) = prior {
            prior.remove_student(student.id());
            state.mentors.save(&prior).await.map_err(|e| {
                ApiError::internal_server_error(format!("Failed to save mentor: {}", e))
            })?;
        }
    }

    new_mentor.add_student(student.id());
    student.assign_mentor(new_mentor.id());

    state
        .mentors
        .save(&new_mentor)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save mentor: {}", e)))?;
    state
        .students
        .save(&student)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save student: {}", e)))?;

    Ok(Json(StudentResponse::from(&student)))
}

/// Request body for auto-assignment
#[derive(Debug, Deserialize)]
pub struct AutoAssignRequest {
    #[serde(rename = "mentorId")]
    pub mentor_id: Uuid,
}

/// Pair a mentor with the earliest-created unmentored student
///
/// POST /assign
pub async fn auto_assign(
    State(state): State<AppState>,
    Json(req): Json<AutoAssignRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let mentor = state
        .mentors
        .find_by_id(req.mentor_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;
    let student = state
        .students
        .find_first_unmentored()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let (mut mentor, mut student) = match (mentor, student) {
        (Some(mentor), Some(student)) => (mentor, student),
        _ => return Err(ApiError::not_found("Mentor or student not found")),
    };

    mentor.add_student(student.id());
    student.assign_mentor(mentor.id());

    state
        .mentors
        .save(&mentor)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save mentor: {}", e)))?;
    state
        .students
        .save(&student)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save student: {}", e)))?;

    Ok(Json(StudentResponse::from(&student)))
}
