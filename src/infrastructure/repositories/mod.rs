// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod mongo_mentor_repository;
pub mod mongo_student_repository;

pub use mongo_mentor_repository::MongoMentorRepository;
pub use mongo_student_repository::MongoStudentRepository;
