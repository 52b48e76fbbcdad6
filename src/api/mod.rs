// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};

use state::AppState;

/// Build the application router
///
/// Route table mirrors the HTTP surface of the service; middleware is
/// layered on by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::index))
        // Creation
        .route("/mentors", post(handlers::mentors::create_mentor))
        .route("/students", post(handlers::students::create_student))
        // Assignment
        .route(
            "/mentors/:mentor_id/students/:student_id",
            put(handlers::assignments::assign_student),
        )
        .route(
            "/mentors/:mentor_id/students",
            post(handlers::assignments::bulk_assign_students),
        )
        .route(
            "/students/:student_id/mentor/:mentor_id",
            put(handlers::assignments::reassign_mentor),
        )
        .route("/assign", post(handlers::assignments::auto_assign))
        // Relationship queries
        .route(
            "/mentors/:mentor_id/students",
            get(handlers::mentors::list_mentor_students),
        )
        .route(
            "/students/:student_id/mentor",
            get(handlers::students::get_student_mentor),
        )
        .with_state(state)
}
