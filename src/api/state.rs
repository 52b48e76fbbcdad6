use std::sync::Arc;

use crate::domain::repositories::{MentorRepository, StudentRepository};

/// Shared handler state
///
/// Repositories are constructed once at startup and injected here, so
/// handlers depend on the ports rather than on a concrete store. Tests
/// swap in in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub mentors: Arc<dyn MentorRepository>,
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Creates a new AppState from the repository implementations
    pub fn new(mentors: Arc<dyn MentorRepository>, students: Arc<dyn StudentRepository>) -> Self {
        Self { mentors, students }
    }
}
