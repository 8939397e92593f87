//! SQLite-backed repositories.

mod posted_job_repository;

pub use posted_job_repository::PostedJobRepository;
