use async_trait::async_trait;
use bson::doc;
use mongodb::{Collection, Database};
use uuid::Uuid;

use crate::domain::mentor::Mentor;
use crate::domain::repositories::{MentorRepository, RepositoryError};
use crate::infrastructure::documents::{MentorDocument, MENTOR_COLLECTION};
use crate::infrastructure::mongo;

/// MongoDB implementation of MentorRepository
///
/// Mentors live in the `mentors` collection with a unique index on
/// `email`, applied at construction.
pub struct MongoMentorRepository {
    collection: Collection<MentorDocument>,
}

impl MongoMentorRepository {
    /// Creates the repository and applies the schema's indexes
    pub async fn new(database: &Database) -> Result<Self, RepositoryError> {
        let collection = database.collection::<MentorDocument>(MENTOR_COLLECTION);
        mongo::apply_indexes(&collection).await?;

        Ok(Self { collection })
    }
}

#[async_trait]
impl MentorRepository for MongoMentorRepository {
    async fn insert(&self, mentor: &Mentor) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(MentorDocument::from_domain(mentor))
            .await
            .map_err(mongo::classify_write_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>, RepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find mentor by id: {}", e))
            })?;

        document.map(MentorDocument::into_domain).transpose()
    }

    async fn save(&self, mentor: &Mentor) -> Result<(), RepositoryError> {
        self.collection
            .replace_one(
                doc! { "_id": mentor.id().to_string() },
                MentorDocument::from_domain(mentor),
            )
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to save mentor: {}", e)))?;

        Ok(())
    }
}
