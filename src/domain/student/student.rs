use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::Email;

/// Student entity
///
/// A student is owned by at most one mentor. The `mentor` reference
/// mirrors the owning mentor's student list; assignment operations
/// update both sides together.
///
/// # Invariants
/// - Name cannot be empty
/// - Email is validated by the `Email` value object
#[derive(Debug, Clone)]
pub struct Student {
    id: Uuid,
    name: String,
    email: Email,
    age: Option<i32>,
    standard: Option<String>,
    mentor: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Student {
    /// Creates a new unmentored Student
    ///
    /// # Arguments
    /// * `name` - The student's display name (cannot be empty)
    /// * `email` - Validated email address
    /// * `age` - Optional age
    /// * `standard` - Optional grade/level label
    ///
    /// # Returns
    /// * `Ok(Student)` - New student with a generated id and no mentor
    /// * `Err(String)` - If the name is empty
    pub fn new(
        name: String,
        email: Email,
        age: Option<i32>,
        standard: Option<String>,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            standard,
            mentor: None,
            created_at: Utc::now(),
        })
    }

    /// Returns true if the student currently has a mentor
    pub fn has_mentor(&self) -> bool {
        self.mentor.is_some()
    }

    /// Points the student's mentor reference at the given mentor
    ///
    /// Overwrites any previous reference; the caller is responsible for
    /// detaching the student from the prior mentor's list.
    pub fn assign_mentor(&mut self, mentor_id: Uuid) {
        self.mentor = Some(mentor_id);
    }

    // ===== Getters =====

    /// Returns the student's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the student's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's email
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the student's age if known
    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// Returns the grade/level label if known
    pub fn standard(&self) -> Option<&str> {
        self.standard.as_deref()
    }

    /// Returns the id of the owning mentor if one is assigned
    pub fn mentor(&self) -> Option<Uuid> {
        self.mentor
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Student from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was
    /// stored. Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        email: Email,
        age: Option<i32>,
        standard: Option<String>,
        mentor: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            age,
            standard,
            mentor,
            created_at,
        }
    }
}
