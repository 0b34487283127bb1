//! Shell configuration: an optional TOML file layered under `ROSTER_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Deserialised settings. Every field has a default, so a missing file and an
/// empty environment give the plain `students.db` session.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

impl Default for ShellConfig {
  fn default() -> Self { Self { store_path: default_store_path() } }
}

fn default_store_path() -> PathBuf { PathBuf::from("students.db") }

/// Read `path` (if it exists) and then `ROSTER_*` variables, later sources
/// taking precedence.
pub fn load(path: &Path) -> anyhow::Result<ShellConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("ROSTER"))
    .build()
    .with_context(|| format!("failed to read config file {}", path.display()))?;

  settings
    .try_deserialize()
    .context("failed to deserialise ShellConfig")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("students.db"));
  }

  #[test]
  fn file_sets_store_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, "store_path = \"/var/lib/roster/class.db\"\n").unwrap();

    let cfg = load(&path).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/roster/class.db"));
  }

  #[test]
  fn expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde(Path::new("students.db")), PathBuf::from("students.db"));
    assert_eq!(expand_tilde(Path::new("/tmp/a.db")), PathBuf::from("/tmp/a.db"));
  }

  #[test]
  fn expand_tilde_uses_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/grades.db")),
      PathBuf::from(home).join("grades.db")
    );
  }
}
