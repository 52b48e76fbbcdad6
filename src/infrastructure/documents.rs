//! BSON document schemas for the mentors and students collections
//!
//! Documents are the persistence-side shape of the domain entities;
//! mapping back into the domain goes through `from_persistence`.

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::mentor::Mentor;
use crate::domain::repositories::RepositoryError;
use crate::domain::student::Student;
use crate::domain::value_objects::Email;
use crate::infrastructure::mongo::IntoIndexes;

/// Collection name for mentors
pub const MENTOR_COLLECTION: &str = "mentors";

/// Collection name for students
pub const STUDENT_COLLECTION: &str = "students";

/// Mentor document stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub expertise: Vec<String>,

    #[serde(default)]
    pub students: Vec<Uuid>,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MentorDocument {
    pub fn from_domain(mentor: &Mentor) -> Self {
        Self {
            id: mentor.id(),
            name: mentor.name().to_string(),
            email: mentor.email().to_string(),
            expertise: mentor.expertise().to_vec(),
            students: mentor.students().to_vec(),
            created_at: mentor.created_at(),
        }
    }

    pub fn into_domain(self) -> Result<Mentor, RepositoryError> {
        let email = Email::new(&self.email)
            .map_err(|e| RepositoryError::Database(format!("Invalid email from database: {}", e)))?;

        Ok(Mentor::from_persistence(
            self.id,
            self.name,
            email,
            self.expertise,
            self.students,
            self.created_at,
        ))
    }
}

impl IntoIndexes for MentorDocument {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "email": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            ),
        )]
    }
}

/// Student document stored in MongoDB
///
/// The `mentor` field is omitted from the document when unset so that
/// `{"mentor": {"$exists": false}}` selects unmentored students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor: Option<Uuid>,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl StudentDocument {
    pub fn from_domain(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().to_string(),
            email: student.email().to_string(),
            age: student.age(),
            standard: student.standard().map(str::to_string),
            mentor: student.mentor(),
            created_at: student.created_at(),
        }
    }

    pub fn into_domain(self) -> Result<Student, RepositoryError> {
        let email = Email::new(&self.email)
            .map_err(|e| RepositoryError::Database(format!("Invalid email from database: {}", e)))?;

        Ok(Student::from_persistence(
            self.id,
            self.name,
            email,
            self.age,
            self.standard,
            self.mentor,
            self.created_at,
        ))
    }
}

impl IntoIndexes for StudentDocument {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "email": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            ),
        )]
    }
}
