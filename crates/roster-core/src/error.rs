//! Error types for `roster-core`.

use thiserror::Error;

use crate::student::StudentId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid student id: {0:?}")]
  InvalidStudentId(String),

  #[error("invalid grade: {0:?}")]
  InvalidGrade(String),

  #[error("student name cannot be empty")]
  EmptyName,

  #[error("student not found: {0}")]
  StudentNotFound(StudentId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Implemented by backend error types so callers can tell a missing student
/// apart from a storage fault without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn is_not_found(&self) -> bool;
}
