// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod mentor;
pub mod repositories;
pub mod student;
pub mod value_objects;
