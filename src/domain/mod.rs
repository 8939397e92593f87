pub mod models;

pub use models::{job_id_for_link, JobPosting, Site};
