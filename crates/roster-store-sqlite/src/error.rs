//! Error type for `roster-store-sqlite`.

use roster_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Domain-level failures, including [`roster_core::Error::StudentNotFound`].
  #[error(transparent)]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  fn is_not_found(&self) -> bool {
    matches!(self, Self::Core(roster_core::Error::StudentNotFound(_)))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
