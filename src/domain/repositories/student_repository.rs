use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::student::Student;

/// Repository trait for the Student entity
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a newly created student
    ///
    /// Fails with `RepositoryError::DuplicateEmail` if another student
    /// already uses the same email.
    async fn insert(&self, student: &Student) -> Result<(), RepositoryError>;

    /// Find a student by its id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError>;

    /// Find all students whose mentor reference is absent, in creation order
    async fn find_unmentored(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Find the earliest-created student whose mentor reference is absent
    async fn find_first_unmentored(&self) -> Result<Option<Student>, RepositoryError>;

    /// Persist the student's current state, replacing the stored record
    async fn save(&self, student: &Student) -> Result<(), RepositoryError>;
}
