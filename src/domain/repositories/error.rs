use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique email index rejected the write
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// Any other store failure
    #[error("Database error: {0}")]
    Database(String),
}
