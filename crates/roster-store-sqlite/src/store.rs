//! [`SqliteStore`]: keeps the roster's students and grades in one SQLite file.

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{
  grade::RosterEntry,
  report::StudentStats,
  store::RosterStore,
  student::{NewStudent, Student, StudentId},
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster backed by a single SQLite file.
///
/// The connection is opened once and lives as long as the store. Every query
/// goes through [`tokio_rusqlite::Connection::call`]; the connection is
/// released when the store is closed or dropped.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening roster store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a store that lives only as long as this connection. Tests use it.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, surfacing any error SQLite reports.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn not_found(id: StudentId) -> crate::Error { roster_core::Error::StudentNotFound(id).into() }

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for SqliteStore {
  type Error = crate::Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn add_student(&self, input: NewStudent) -> Result<Student> {
    let NewStudent { name, grade } = input;
    let insert_name = name.clone();

    // Both rows land together or not at all.
    let raw_id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO students (name) VALUES (?1)",
          rusqlite::params![insert_name],
        )?;
        let student_id = tx.last_insert_rowid();
        tx.execute(
          "INSERT INTO grades (student_id, grade) VALUES (?1, ?2)",
          rusqlite::params![student_id, grade],
        )?;
        tx.commit()?;
        Ok(student_id)
      })
      .await?;

    let id = StudentId(raw_id);
    tracing::info!(%id, %name, grade, "added student");
    Ok(Student { id, name })
  }

  async fn update_grade(&self, id: StudentId, grade: f64) -> Result<usize> {
    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE grades SET grade = ?1 WHERE student_id = ?2",
          rusqlite::params![grade, id.0],
        )?)
      })
      .await?;

    if changed == 0 {
      tracing::debug!(%id, "grade update matched no rows");
      return Err(not_found(id));
    }

    tracing::info!(%id, grade, rows = changed, "updated grade");
    Ok(changed)
  }

  async fn delete_student(&self, id: StudentId) -> Result<Student> {
    let removed: Option<(String, usize)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let name: Option<String> = tx
          .query_row(
            "SELECT name FROM students WHERE id = ?1",
            rusqlite::params![id.0],
            |r| r.get(0),
          )
          .optional()?;

        let Some(name) = name else {
          return Ok(None);
        };

        // Grades first, so no row ever points at a missing student.
        let grades = tx.execute(
          "DELETE FROM grades WHERE student_id = ?1",
          rusqlite::params![id.0],
        )?;
        tx.execute("DELETE FROM students WHERE id = ?1", rusqlite::params![id.0])?;
        tx.commit()?;
        Ok(Some((name, grades)))
      })
      .await?;

    let (name, grades) = removed.ok_or_else(|| not_found(id))?;
    tracing::info!(%id, %name, grades, "deleted student");
    Ok(Student { id, name })
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
    let name: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT name FROM students WHERE id = ?1",
            rusqlite::params![id.0],
            |r| r.get(0),
          )
          .optional()?)
      })
      .await?;

    Ok(name.map(|name| Student { id, name }))
  }

  async fn list_entries(&self) -> Result<Vec<RosterEntry>> {
    let entries = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT s.id, s.name, g.grade
           FROM students s
           LEFT JOIN grades g ON g.student_id = s.id
           ORDER BY s.id, g.id",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RosterEntry {
              student_id: StudentId(row.get(0)?),
              name:       row.get(1)?,
              grade:      row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    tracing::debug!(rows = entries.len(), "listed roster");
    Ok(entries)
  }

  async fn statistics(&self) -> Result<Vec<StudentStats>> {
    let stats = self
      .conn
      .call(|conn| {
        // Inner join: students without a grade are left out.
        let mut stmt = conn.prepare(
          "SELECT s.id, s.name, AVG(g.grade), MAX(g.grade)
           FROM students s
           JOIN grades g ON g.student_id = s.id
           WHERE g.grade IS NOT NULL
           GROUP BY s.id
           ORDER BY s.id",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(StudentStats {
              student_id: StudentId(row.get(0)?),
              name:       row.get(1)?,
              average:    row.get(2)?,
              max:        row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    tracing::debug!(rows = stats.len(), "computed statistics");
    Ok(stats)
  }
}
