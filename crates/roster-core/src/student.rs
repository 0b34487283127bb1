//! Student identity and the validated input for creating one.

use std::{fmt, str::FromStr};

use crate::{Error, Result, grade::parse_grade};

/// Identifier assigned by the store on creation. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for StudentId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    s.trim()
      .parse::<i64>()
      .map(StudentId)
      .map_err(|_| Error::InvalidStudentId(s.to_owned()))
  }
}

/// A persisted student. Only the name is carried; grades live in their own
/// table and are joined on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
  pub id:   StudentId,
  pub name: String,
}

/// Input for adding a student together with their initial grade.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
  pub name:  String,
  pub grade: f64,
}

impl NewStudent {
  /// Build from already-parsed parts. The name is trimmed and must not be
  /// empty afterwards; duplicates are allowed.
  pub fn new(name: impl AsRef<str>, grade: f64) -> Result<Self> {
    let name = name.as_ref().trim();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self { name: name.to_owned(), grade })
  }

  /// Build from raw user text, validating both fields.
  pub fn parse(name: &str, grade: &str) -> Result<Self> {
    let grade = parse_grade(grade)?;
    Self::new(name, grade)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn student_id_parses_trimmed_integers() {
    assert_eq!(" 42 ".parse::<StudentId>().unwrap(), StudentId(42));
    assert_eq!("-3".parse::<StudentId>().unwrap(), StudentId(-3));
  }

  #[test]
  fn student_id_rejects_non_integers() {
    for input in ["", "abc", "1.5", "7x"] {
      let err = input.parse::<StudentId>().unwrap_err();
      assert!(matches!(err, Error::InvalidStudentId(_)), "{input:?}");
    }
  }

  #[test]
  fn new_student_trims_name() {
    let s = NewStudent::new("  Alice ", 92.0).unwrap();
    assert_eq!(s.name, "Alice");
    assert_eq!(s.grade, 92.0);
  }

  #[test]
  fn new_student_rejects_blank_name() {
    assert!(matches!(NewStudent::new("   ", 50.0), Err(Error::EmptyName)));
  }

  #[test]
  fn parse_checks_grade_before_name() {
    assert!(matches!(
      NewStudent::parse("", "ninety"),
      Err(Error::InvalidGrade(_))
    ));
    assert!(matches!(NewStudent::parse("", "90"), Err(Error::EmptyName)));
  }
}
