//! The `PessoaStore` trait — the system of record.
//!
//! Implemented by storage backends (e.g. `pessoas-store-sqlite`). The service
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::pessoa::Pessoa;

/// Result of [`PessoaStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
  Inserted,
  /// The uniqueness constraint on `apelido` rejected the row. Nothing was
  /// written.
  ApelidoTaken,
}

/// Abstraction over a record store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PessoaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `pessoa` in a single atomic statement.
  ///
  /// A duplicate `apelido` must be detected from the store's own uniqueness
  /// constraint and reported as [`InsertOutcome::ApelidoTaken`], never by a
  /// separate lookup beforehand.
  fn insert<'a>(
    &'a self,
    pessoa: &'a Pessoa,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + 'a;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Pessoa>, Self::Error>> + Send + '_;

  /// All records whose search text (apelido, nome and stack entries) contains
  /// `term`, case-sensitively. Order is unspecified and there is no limit.
  fn search<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Pessoa>, Self::Error>> + Send + 'a;

  /// Total number of stored records.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
