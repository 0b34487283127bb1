//! Menu loop and the five roster actions.
//!
//! The shell is generic over its input and output so tests can drive a whole
//! session from a script. No store or input error ever ends the session; only
//! choice 6, end of input, or a failing terminal does.

use std::io;

use roster_core::{
  StoreError as _,
  store::RosterStore,
  student::{NewStudent, StudentId},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

// ─── Menu ─────────────────────────────────────────────────────────────────────

const MAIN_MENU: &str = "\n=== Student Records Menu ===
1. Add student and grade
2. Update grade
3. Delete student
4. List students and grades
5. Show statistics
6. Exit";

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
  Add,
  Update,
  Delete,
  List,
  Statistics,
  Exit,
}

impl Choice {
  fn parse(input: &str) -> Option<Self> {
    match input.trim() {
      "1" => Some(Self::Add),
      "2" => Some(Self::Update),
      "3" => Some(Self::Delete),
      "4" => Some(Self::List),
      "5" => Some(Self::Statistics),
      "6" => Some(Self::Exit),
      _ => None,
    }
  }
}

// ─── Shell ────────────────────────────────────────────────────────────────────

pub struct Shell<S, R, W> {
  store:  S,
  input:  R,
  output: W,
}

impl<S, R, W> Shell<S, R, W>
where
  S: RosterStore,
  R: AsyncBufRead + Unpin,
  W: AsyncWrite + Unpin,
{
  pub fn new(store: S, input: R, output: W) -> Self { Self { store, input, output } }

  /// Hand back the store and the output sink once the session is over.
  pub fn into_parts(self) -> (S, W) { (self.store, self.output) }

  /// Run the menu loop until the user exits or input ends.
  pub async fn run(&mut self) -> io::Result<()> {
    loop {
      self.say(MAIN_MENU).await?;
      let Some(line) = self.prompt("Enter your choice: ").await? else {
        break;
      };

      let Some(choice) = Choice::parse(&line) else {
        self.say("Invalid choice. Please try again.").await?;
        continue;
      };
      tracing::debug!(?choice, "menu selection");

      match choice {
        Choice::Add => self.add_student().await?,
        Choice::Update => self.update_grade().await?,
        Choice::Delete => self.delete_student().await?,
        Choice::List => self.list_students().await?,
        Choice::Statistics => self.show_statistics().await?,
        Choice::Exit => break,
      }
    }

    self.say("Goodbye!").await
  }

  // ── Actions ───────────────────────────────────────────────────────────────

  async fn add_student(&mut self) -> io::Result<()> {
    if !self.continue_or_return("--- Add Student and Grade ---").await? {
      return Ok(());
    }

    let Some(name) = self.prompt("Enter student name: ").await? else {
      return Ok(());
    };
    let Some(grade) = self.prompt("Enter grade Number: ").await? else {
      return Ok(());
    };

    let input = match NewStudent::parse(&name, &grade) {
      Ok(input) => input,
      Err(roster_core::Error::EmptyName) => {
        return self.say("Invalid name, cannot be empty.").await;
      }
      Err(_) => return self.say("Invalid grade, Needs to be a Number.").await,
    };

    match self.store.add_student(input).await {
      Ok(student) => {
        self
          .say(&format!(
            "Student and grade added successfully. (ID: {})",
            student.id
          ))
          .await
      }
      Err(e) => {
        tracing::warn!(error = %e, "add failed");
        self
          .say(&format!("Error inserting student and grade: {e}"))
          .await
      }
    }
  }

  async fn update_grade(&mut self) -> io::Result<()> {
    if !self.continue_or_return("--- Update Grade ---").await? {
      return Ok(());
    }

    let Some(id) = self.prompt("Enter student ID: ").await? else {
      return Ok(());
    };
    let Ok(id) = id.parse::<StudentId>() else {
      return self.say("Invalid input, Needs to be a Number.").await;
    };

    let Some(grade) = self.prompt("Enter new grade Number: ").await? else {
      return Ok(());
    };
    let Ok(grade) = roster_core::grade::parse_grade(&grade) else {
      return self.say("Invalid input, Needs to be a Number.").await;
    };

    match self.store.update_grade(id, grade).await {
      Ok(_) => self.say("Grade updated.").await,
      Err(e) if e.is_not_found() => {
        self.say(&format!("No student found with ID {id}.")).await
      }
      Err(e) => {
        tracing::warn!(error = %e, %id, "update failed");
        self.say(&format!("Error updating grade: {e}")).await
      }
    }
  }

  async fn delete_student(&mut self) -> io::Result<()> {
    if !self.continue_or_return("--- Delete Student ---").await? {
      return Ok(());
    }

    let Some(id) = self.prompt("Enter student ID to delete: ").await? else {
      return Ok(());
    };
    let Ok(id) = id.parse::<StudentId>() else {
      return self.say("Invalid ID.").await;
    };

    let student = match self.store.get_student(id).await {
      Ok(Some(student)) => student,
      Ok(None) => return self.say(&format!("No student found with ID {id}.")).await,
      Err(e) => {
        tracing::warn!(error = %e, %id, "lookup failed");
        return self.say(&format!("Error looking up student: {e}")).await;
      }
    };

    let question = format!(
      "Are you sure you want to delete student named '{}'? (y/n): ",
      student.name
    );
    let confirmed = self
      .prompt(&question)
      .await?
      .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
    if !confirmed {
      return self.say("Deletion canceled.").await;
    }

    match self.store.delete_student(id).await {
      Ok(removed) => self.say(&format!("Student '{}' deleted.", removed.name)).await,
      Err(e) if e.is_not_found() => {
        self.say(&format!("No student found with ID {id}.")).await
      }
      Err(e) => {
        tracing::warn!(error = %e, %id, "delete failed");
        self.say(&format!("Error deleting student: {e}")).await
      }
    }
  }

  async fn list_students(&mut self) -> io::Result<()> {
    self.say("\n--- List of Students and Grades ---").await?;

    let entries = match self.store.list_entries().await {
      Ok(entries) => entries,
      Err(e) => {
        tracing::warn!(error = %e, "listing failed");
        return self.say(&format!("Error listing students: {e}")).await;
      }
    };

    if entries.is_empty() {
      return self.say("No records found.").await;
    }
    for entry in &entries {
      self.say(&entry.to_string()).await?;
    }
    Ok(())
  }

  async fn show_statistics(&mut self) -> io::Result<()> {
    self.say("\n--- Grade Statistics ---").await?;

    let stats = match self.store.statistics().await {
      Ok(stats) => stats,
      Err(e) => {
        tracing::warn!(error = %e, "statistics failed");
        return self.say(&format!("Error computing statistics: {e}")).await;
      }
    };

    if stats.is_empty() {
      return self.say("No statistics available.").await;
    }
    for row in &stats {
      self.say(&row.to_string()).await?;
    }
    Ok(())
  }

  // ── Terminal helpers ──────────────────────────────────────────────────────

  /// Print an action header with the continue/return sub-menu. Returns `true`
  /// only when the user picks `1`.
  async fn continue_or_return(&mut self, header: &str) -> io::Result<bool> {
    self.say(&format!("\n{header}")).await?;
    self.say("1. Continue\n2. Return to Main Menu").await?;
    Ok(
      self
        .prompt("Select an option: ")
        .await?
        .is_some_and(|answer| answer.trim() == "1"),
    )
  }

  async fn say(&mut self, text: &str) -> io::Result<()> {
    self.output.write_all(text.as_bytes()).await?;
    self.output.write_all(b"\n").await?;
    self.output.flush().await
  }

  /// Write `prompt` and read one line. `None` means input has ended.
  async fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
    self.output.write_all(prompt.as_bytes()).await?;
    self.output.flush().await?;

    let mut line = String::new();
    if self.input.read_line(&mut line).await? == 0 {
      return Ok(None);
    }
    Ok(Some(
      line
        .trim_end_matches('\n')
        .trim_end_matches('\r')
        .to_string(),
    ))
  }
}
