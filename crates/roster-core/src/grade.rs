//! Grade values and the rows produced by the roster listing.

use std::fmt;

use crate::{Error, Result, student::StudentId};

/// Parse a grade typed by the user. Any finite real number is accepted; there
/// is no range check.
pub fn parse_grade(s: &str) -> Result<f64> {
  match s.trim().parse::<f64>() {
    Ok(v) if v.is_finite() => Ok(v),
    _ => Err(Error::InvalidGrade(s.to_owned())),
  }
}

/// Format a grade with at least one decimal place (`92` prints as `92.0`).
pub fn display_grade(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e16 {
    format!("{value:.1}")
  } else {
    value.to_string()
  }
}

/// Displays an optional grade, using `No grade` for a student without one.
#[derive(Debug, Clone, Copy)]
pub struct GradeDisplay(pub Option<f64>);

impl fmt::Display for GradeDisplay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(v) => f.write_str(&display_grade(v)),
      None => f.write_str("No grade"),
    }
  }
}

/// One student × grade pair from the listing. Students with no grade rows
/// still appear once, with `grade: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
  pub student_id: StudentId,
  pub name:       String,
  pub grade:      Option<f64>,
}

impl fmt::Display for RosterEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "ID: {} | Name: {} | Grade: {}",
      self.student_id,
      self.name,
      GradeDisplay(self.grade)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_grade_accepts_any_real() {
    assert_eq!(parse_grade("92").unwrap(), 92.0);
    assert_eq!(parse_grade(" 87.5\n").unwrap(), 87.5);
    assert_eq!(parse_grade("-4").unwrap(), -4.0);
    assert_eq!(parse_grade("150").unwrap(), 150.0);
  }

  #[test]
  fn parse_grade_rejects_text_and_non_finite() {
    for input in ["", "A+", "NaN", "inf", "12,5"] {
      assert!(
        matches!(parse_grade(input), Err(Error::InvalidGrade(_))),
        "{input:?}"
      );
    }
  }

  #[test]
  fn whole_grades_keep_one_decimal() {
    assert_eq!(display_grade(92.0), "92.0");
    assert_eq!(display_grade(92.5), "92.5");
    assert_eq!(display_grade(-1.0), "-1.0");
  }

  #[test]
  fn entry_formats_missing_grade() {
    let entry = RosterEntry {
      student_id: StudentId(3),
      name:       "Carol".into(),
      grade:      None,
    };
    assert_eq!(entry.to_string(), "ID: 3 | Name: Carol | Grade: No grade");
  }

  #[test]
  fn entry_formats_grade() {
    let entry = RosterEntry {
      student_id: StudentId(1),
      name:       "Alice".into(),
      grade:      Some(92.0),
    };
    assert_eq!(entry.to_string(), "ID: 1 | Name: Alice | Grade: 92.0");
  }
}
