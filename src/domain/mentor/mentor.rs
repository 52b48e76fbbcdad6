use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::Email;

/// Mentor aggregate root
///
/// A mentor owns a list of references to the students currently assigned
/// to it. The list mirrors each assigned student's own mentor reference;
/// assignment operations update both sides together.
///
/// # Invariants
/// - Name cannot be empty
/// - Email is validated by the `Email` value object
///
/// # Example
/// ```
/// use mentorship_api::domain::mentor::Mentor;
/// use mentorship_api::domain::value_objects::Email;
///
/// let email = Email::new("mentor@example.com").expect("valid email");
/// let mentor = Mentor::new("Grace".to_string(), email, vec!["rust".to_string()])
///     .expect("valid mentor");
///
/// assert_eq!(mentor.name(), "Grace");
/// assert!(mentor.students().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Mentor {
    id: Uuid,
    name: String,
    email: Email,
    expertise: Vec<String>,
    students: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl Mentor {
    /// Creates a new Mentor with no assigned students
    ///
    /// # Arguments
    /// * `name` - The mentor's display name (cannot be empty)
    /// * `email` - Validated email address
    /// * `expertise` - Areas of expertise, may be empty
    ///
    /// # Returns
    /// * `Ok(Mentor)` - New mentor with a generated id
    /// * `Err(String)` - If the name is empty
    pub fn new(name: String, email: Email, expertise: Vec<String>) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            expertise,
            students: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Returns true if the given student id is already in the list
    pub fn contains_student(&self, student_id: Uuid) -> bool {
        self.students.contains(&student_id)
    }

    /// Appends a student reference
    ///
    /// Does not check for duplicates; callers that need the
    /// already-assigned conflict check perform it before appending.
    pub fn add_student(&mut self, student_id: Uuid) {
        self.students.push(student_id);
    }

    /// Removes every occurrence of a student reference
    ///
    /// Removing an id that is not in the list is a no-op.
    pub fn remove_student(&mut self, student_id: Uuid) {
        self.students.retain(|id| *id != student_id);
    }

    // ===== Getters =====

    /// Returns the mentor's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the mentor's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mentor's email
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the mentor's areas of expertise
    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    /// Returns the ids of the students assigned to this mentor
    pub fn students(&self) -> &[Uuid] {
        &self.students
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Mentor from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was
    /// stored. Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        email: Email,
        expertise: Vec<String>,
        students: Vec<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            expertise,
            students,
            created_at,
        }
    }
}
