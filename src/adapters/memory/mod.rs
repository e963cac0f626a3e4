//! In-memory adapters for tests and local development.

mod submission_repository;

pub use submission_repository::InMemorySubmissionRepository;
