//! SQL schema for the roster store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout; there are no migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS students (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

-- A student normally has exactly one grade row. Updates rewrite every row
-- of the student; deletes remove the grade rows before the student row.
CREATE TABLE IF NOT EXISTS grades (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id  INTEGER,
    grade       REAL,
    FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS grades_student_idx ON grades(student_id);

PRAGMA user_version = 1;
";
