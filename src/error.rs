//! Errors returned by the query operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("faculty not found: {0}")]
    FacultyNotFound(String),

    #[error("faculty id must not be blank")]
    InvalidFacultyId,
}

impl QueryError {
    /// Rejects ids that are empty or whitespace-only. Other ids are returned
    /// unchanged and matched exactly.
    pub fn check_faculty_id(faculty_id: &str) -> Result<&str, QueryError> {
        if faculty_id.trim().is_empty() {
            Err(QueryError::InvalidFacultyId)
        } else {
            Ok(faculty_id)
        }
    }
}
