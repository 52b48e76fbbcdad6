//! MongoDB connection bootstrap and index plumbing

use bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::domain::repositories::RepositoryError;

/// Trait for document schemas that declare their collection indexes
pub trait IntoIndexes {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)>;
}

/// Connect to MongoDB and verify the connection with a ping
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, RepositoryError> {
    // serverSelectionTimeoutMS keeps startup from hanging on an unreachable server
    let timeout_uri = if uri.contains('?') {
        format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
    } else {
        format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
    };

    let client = Client::with_uri_str(&timeout_uri)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

    let database = client.database(db_name);
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| RepositoryError::Database(format!("MongoDB ping failed: {}", e)))?;

    info!("Connected to MongoDB database '{}'", db_name);

    Ok(database)
}

/// Apply a schema's declared indexes to its collection
pub async fn apply_indexes<T>(collection: &Collection<T>) -> Result<(), RepositoryError>
where
    T: IntoIndexes + Send + Sync,
{
    let schema_indices = T::into_indices();

    if schema_indices.is_empty() {
        return Ok(());
    }

    let indices: Vec<IndexModel> = schema_indices
        .into_iter()
        .map(|(keys, opts)| IndexModel::builder().keys(keys).options(opts).build())
        .collect();

    collection
        .create_indexes(indices)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to create indexes: {}", e)))?;

    Ok(())
}

/// Classify a write failure, surfacing unique-index violations distinctly
pub fn classify_write_error(err: mongodb::error::Error) -> RepositoryError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        // 11000 is the server's duplicate key error code
        if write_error.code == 11000 {
            return RepositoryError::DuplicateEmail(write_error.message.clone());
        }
    }

    RepositoryError::Database(format!("Write failed: {}", err))
}
