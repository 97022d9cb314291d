//! Error type for `warga-store-sqlite`.

use thiserror::Error;
use warga_core::{
  record::Nik,
  store::{ErrorKind, StoreError},
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] warga_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  #[error("record not found: {0}")]
  RecordNotFound(Nik),

  /// Insert collided with an existing primary key.
  #[error("duplicate record id: {0}")]
  DuplicateId(Nik),
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Core(e) => e.kind(),
      Error::RecordNotFound(_) => ErrorKind::NotFound,
      Error::DuplicateId(_) => ErrorKind::DuplicateId,
      Error::Database(_) | Error::DateParse(_) => ErrorKind::Backend,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
