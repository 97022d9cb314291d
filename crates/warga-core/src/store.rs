//! The `RecordStore` trait — the narrow seam between the registry's domain
//! and whatever holds the rows.
//!
//! The trait is implemented by storage backends (e.g. `warga-store-sqlite`).
//! Higher layers (`warga-api`, `warga-cli`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  query::{AdminQuery, Page, RecordQuery},
  record::{FamilyMember, Nik, Record, RecordPatch},
};

/// How a backend failure should be reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Validation,
  NotFound,
  DuplicateId,
  /// Anything internal to the backend: connection loss, corrupt rows.
  Backend,
}

/// Implemented by backend error types so protocol layers can pick a status
/// code without naming the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;
}

impl StoreError for crate::Error {
  fn kind(&self) -> ErrorKind {
    match self {
      crate::Error::Validation(_) => ErrorKind::Validation,
      crate::Error::NotFound(_) => ErrorKind::NotFound,
      crate::Error::DuplicateId(_) => ErrorKind::DuplicateId,
    }
  }
}

/// Abstraction over a registry storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: StoreError;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new record. Fails if the id is already taken.
  fn insert(
    &self,
    record: Record,
  ) -> impl Future<Output = Result<Record, Self::Error>> + Send + '_;

  /// Apply a partial update to the record with the given id and return the
  /// updated row. Fails if the id is unknown.
  fn update(
    &self,
    id: Nik,
    patch: RecordPatch,
  ) -> impl Future<Output = Result<Record, Self::Error>> + Send + '_;

  /// Delete the record with the given id. Fails if the id is unknown.
  /// Household members are untouched; there is no cascade.
  fn delete(
    &self,
    id: Nik,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Nik,
  ) -> impl Future<Output = Result<Option<Record>, Self::Error>> + Send + '_;

  /// Run a public search: one page of matches plus the total row count for
  /// the same predicate.
  fn search<'a>(
    &'a self,
    query: &'a RecordQuery,
  ) -> impl Future<Output = Result<Page<Record>, Self::Error>> + Send + 'a;

  /// Run an admin list search: substring match on id or name, ten rows per
  /// page. An empty term lists everything.
  fn list<'a>(
    &'a self,
    query: &'a AdminQuery,
  ) -> impl Future<Output = Result<Page<Record>, Self::Error>> + Send + 'a;

  /// All members of the household, minus `excluding` when given, in store
  /// order.
  fn family(
    &self,
    household_id: Nik,
    excluding: Option<Nik>,
  ) -> impl Future<Output = Result<Vec<FamilyMember>, Self::Error>> + Send + '_;
}
