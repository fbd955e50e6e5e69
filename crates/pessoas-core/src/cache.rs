//! The `PessoaCache` trait — a plain string key-value accelerator.
//!
//! The cache is never authoritative. Values are the JSON form of
//! [`Pessoa`](crate::pessoa::Pessoa), keyed by
//! [`cache_key`](crate::pessoa::cache_key).

use std::future::Future;

pub trait PessoaCache: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the value stored under `key`, if any.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Store `value` under `key`, replacing any previous value.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
