use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::mentor::Mentor;

/// Repository trait for the Mentor entity
///
/// Defines the contract for persisting and retrieving mentors.
/// Implementations handle store-specific details, including enforcement
/// of email uniqueness.
#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// Persist a newly created mentor
    ///
    /// Fails with `RepositoryError::DuplicateEmail` if another mentor
    /// already uses the same email.
    async fn insert(&self, mentor: &Mentor) -> Result<(), RepositoryError>;

    /// Find a mentor by its id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>, RepositoryError>;

    /// Persist the mentor's current state, replacing the stored record
    async fn save(&self, mentor: &Mentor) -> Result<(), RepositoryError>;
}
