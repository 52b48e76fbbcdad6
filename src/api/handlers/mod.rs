// HTTP handlers (adapters for controllers)

pub mod assignments;
pub mod mentors;
pub mod students;

/// Liveness probe
///
/// GET /
pub async fn index() -> &'static str {
    "Student Mentor Service"
}
