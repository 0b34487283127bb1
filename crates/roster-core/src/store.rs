//! The `RosterStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The shell in
//! `roster-cli` depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  error::StoreError,
  grade::RosterEntry,
  report::StudentStats,
  student::{NewStudent, Student, StudentId},
};

/// Abstraction over a roster backend.
///
/// Every method is a self-contained unit of work: a method either applies all
/// of its writes or none of them.
pub trait RosterStore: Send + Sync {
  type Error: StoreError;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new student and their initial grade. The store assigns the
  /// identifier. Not idempotent: repeated calls create duplicates.
  fn add_student(
    &self,
    input: NewStudent,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  /// Set every grade row of `id` to `grade`. Returns the number of rows
  /// changed; fails with a not-found error when that number is zero.
  fn update_grade(
    &self,
    id: StudentId,
    grade: f64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Remove a student and all of their grades. Returns the removed student,
  /// or a not-found error if there was none.
  fn delete_student(
    &self,
    id: StudentId,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a student by id. Returns `None` if not found.
  fn get_student(
    &self,
    id: StudentId,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  /// Every student paired with each of their grades, ordered by student id.
  /// Students without grades appear once with no grade.
  fn list_entries(
    &self,
  ) -> impl Future<Output = Result<Vec<RosterEntry>, Self::Error>> + Send + '_;

  /// Average and maximum grade for each student that has at least one grade,
  /// ordered by student id.
  fn statistics(
    &self,
  ) -> impl Future<Output = Result<Vec<StudentStats>, Self::Error>> + Send + '_;
}
