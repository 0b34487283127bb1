//! Per-student statistics and the letter-grade scale.

use std::fmt;

use crate::{grade::display_grade, student::StudentId};

/// Letter grade derived from a student's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
  A,
  B,
  C,
  D,
  F,
}

impl LetterGrade {
  /// Map an average onto the scale. Lower bounds are inclusive:
  /// 90 is an A, 89.99 is a B.
  pub fn from_average(average: f64) -> Self {
    if average >= 90.0 {
      Self::A
    } else if average >= 80.0 {
      Self::B
    } else if average >= 70.0 {
      Self::C
    } else if average >= 60.0 {
      Self::D
    } else {
      Self::F
    }
  }

  pub fn standing(self) -> Standing {
    match self {
      Self::F => Standing::Fail,
      _ => Standing::Pass,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::A => "A",
      Self::B => "B",
      Self::C => "C",
      Self::D => "D",
      Self::F => "F",
    }
  }
}

impl fmt::Display for LetterGrade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
  Pass,
  Fail,
}

impl fmt::Display for Standing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Pass => "Pass",
      Self::Fail => "Fail",
    })
  }
}

/// Aggregates over all grade rows of one student. Only students with at least
/// one grade produce a `StudentStats`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStats {
  pub student_id: StudentId,
  pub name:       String,
  pub average:    f64,
  pub max:        f64,
}

impl StudentStats {
  pub fn letter(&self) -> LetterGrade { LetterGrade::from_average(self.average) }

  pub fn standing(&self) -> Standing { self.letter().standing() }
}

impl fmt::Display for StudentStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Name: {} | Average: {:.2} | Max: {} | Letter: {} | Status: {}",
      self.name,
      self.average,
      display_grade(self.max),
      self.letter(),
      self.standing()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn letter_boundaries() {
    let cases = [
      (100.0, LetterGrade::A),
      (90.0, LetterGrade::A),
      (89.99, LetterGrade::B),
      (80.0, LetterGrade::B),
      (79.99, LetterGrade::C),
      (70.0, LetterGrade::C),
      (69.99, LetterGrade::D),
      (60.0, LetterGrade::D),
      (59.99, LetterGrade::F),
      (-5.0, LetterGrade::F),
    ];
    for (avg, expected) in cases {
      assert_eq!(LetterGrade::from_average(avg), expected, "avg = {avg}");
    }
  }

  #[test]
  fn only_f_fails() {
    for letter in [LetterGrade::A, LetterGrade::B, LetterGrade::C, LetterGrade::D] {
      assert_eq!(letter.standing(), Standing::Pass);
    }
    assert_eq!(LetterGrade::F.standing(), Standing::Fail);
  }

  #[test]
  fn stats_line_format() {
    let alice = StudentStats {
      student_id: StudentId(1),
      name:       "Alice".into(),
      average:    92.0,
      max:        92.0,
    };
    assert_eq!(
      alice.to_string(),
      "Name: Alice | Average: 92.00 | Max: 92.0 | Letter: A | Status: Pass"
    );

    let bob = StudentStats {
      student_id: StudentId(2),
      name:       "Bob".into(),
      average:    55.0,
      max:        55.0,
    };
    assert_eq!(
      bob.to_string(),
      "Name: Bob | Average: 55.00 | Max: 55.0 | Letter: F | Status: Fail"
    );
  }
}
