// Infrastructure layer module
// Contains database adapters and external service integrations
// Follows Hexagonal Architecture

pub mod documents;
pub mod mongo;
pub mod repositories;
