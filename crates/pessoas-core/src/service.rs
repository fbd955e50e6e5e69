//! [`PessoaService`] — validation, persistence and the cache-aside read path.
//!
//! Store and cache handles are injected at construction; the service owns no
//! global state and performs no retries.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  cache::PessoaCache,
  pessoa::{NewPessoa, Pessoa, cache_key},
  store::{InsertOutcome, PessoaStore},
};

pub struct PessoaService<S, C> {
  store: S,
  cache: C,
}

impl<S, C> PessoaService<S, C>
where
  S: PessoaStore,
  C: PessoaCache,
{
  pub fn new(store: S, cache: C) -> Self { Self { store, cache } }

  pub fn store(&self) -> &S { &self.store }

  pub fn cache(&self) -> &C { &self.cache }

  /// Validate `input`, persist it under a fresh id and populate the cache.
  ///
  /// A duplicate `apelido` surfaces as [`Error::ApelidoTaken`] once the store
  /// has rejected the insert. A failed cache write does not fail the call.
  pub async fn create(&self, input: NewPessoa) -> Result<Pessoa> {
    input.validate()?;
    let pessoa = input.into_pessoa(Uuid::new_v4());

    match self.store.insert(&pessoa).await.map_err(Error::store)? {
      InsertOutcome::Inserted => {}
      InsertOutcome::ApelidoTaken => {
        return Err(Error::ApelidoTaken(pessoa.apelido));
      }
    }

    self.populate_cache(&pessoa).await;
    Ok(pessoa)
  }

  /// Look up a record: cache first, then the store, backfilling the cache on
  /// a store hit.
  pub async fn get(&self, id: Uuid) -> Result<Pessoa> {
    let key = cache_key(id);

    if let Some(cached) = self.cache.get(&key).await.map_err(Error::cache)? {
      match serde_json::from_str::<Pessoa>(&cached) {
        Ok(pessoa) => {
          debug!(%id, "cache hit");
          return Ok(pessoa);
        }
        Err(e) => warn!(%id, error = %e, "discarding undecodable cache entry"),
      }
    }

    debug!(%id, "cache miss");
    let pessoa = self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    self.populate_cache(&pessoa).await;
    Ok(pessoa)
  }

  /// Substring search over apelido, nome and stack. Never consults the cache.
  pub async fn search(&self, term: &str) -> Result<Vec<Pessoa>> {
    self.store.search(term).await.map_err(Error::store)
  }

  pub async fn count(&self) -> Result<u64> {
    self.store.count().await.map_err(Error::store)
  }

  /// Best-effort cache write; failures are logged and swallowed.
  async fn populate_cache(&self, pessoa: &Pessoa) {
    let value = match serde_json::to_string(pessoa) {
      Ok(v) => v,
      Err(e) => {
        warn!(id = %pessoa.id, error = %e, "failed to serialise record for cache");
        return;
      }
    };
    if let Err(e) = self.cache.set(&pessoa.cache_key(), value).await {
      warn!(id = %pessoa.id, error = %e, "cache write failed");
    }
  }
}
