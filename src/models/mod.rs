pub mod application;
pub mod job_posting;
pub mod saved_posting;
pub mod student_profile;
