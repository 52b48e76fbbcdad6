use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, StudentRepository};
use crate::domain::student::Student;
use crate::infrastructure::documents::{StudentDocument, STUDENT_COLLECTION};
use crate::infrastructure::mongo;

/// MongoDB implementation of StudentRepository
///
/// Students live in the `students` collection with a unique index on
/// `email`. Unmentored students are the documents with no `mentor`
/// field at all.
pub struct MongoStudentRepository {
    collection: Collection<StudentDocument>,
}

impl MongoStudentRepository {
    /// Creates the repository and applies the schema's indexes
    pub async fn new(database: &Database) -> Result<Self, RepositoryError> {
        let collection = database.collection::<StudentDocument>(STUDENT_COLLECTION);
        mongo::apply_indexes(&collection).await?;

        Ok(Self { collection })
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn insert(&self, student: &Student) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(StudentDocument::from_domain(student))
            .await
            .map_err(mongo::classify_write_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, RepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find student by id: {}", e))
            })?;

        document.map(StudentDocument::into_domain).transpose()
    }

    async fn find_unmentored(&self) -> Result<Vec<Student>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! { "mentor": { "$exists": false } })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find unmentored students: {}", e))
            })?;

        let documents: Vec<StudentDocument> = cursor.try_collect().await.map_err(|e| {
            RepositoryError::Database(format!("Failed to read unmentored students: {}", e))
        })?;

        documents
            .into_iter()
            .map(StudentDocument::into_domain)
            .collect()
    }

    async fn find_first_unmentored(&self) -> Result<Option<Student>, RepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "mentor": { "$exists": false } })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to find unmentored student: {}", e))
            })?;

        document.map(StudentDocument::into_domain).transpose()
    }

    async fn save(&self, student: &Student) -> Result<(), RepositoryError> {
        self.collection
            .replace_one(
                doc! { "_id": student.id().to_string() },
                StudentDocument::from_domain(student),
            )
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to save student: {}", e)))?;

        Ok(())
    }
}
