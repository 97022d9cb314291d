//! Error types for `warga-core`.

use thiserror::Error;

use crate::record::Nik;

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(String),

  #[error("record not found: {0}")]
  NotFound(Nik),

  #[error("duplicate record id: {0}")]
  DuplicateId(Nik),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
