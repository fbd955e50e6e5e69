//! In-process cache, shared between clones.

use std::sync::Arc;

use dashmap::DashMap;
use pessoas_core::cache::PessoaCache;

use crate::{Error, Result};

#[derive(Clone, Default)]
pub struct MemoryCache {
  entries: Arc<DashMap<String, String>>,
}

impl MemoryCache {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl PessoaCache for MemoryCache {
  type Error = Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.get(key).map(|v| v.value().clone()))
  }

  async fn set(&self, key: &str, value: String) -> Result<()> {
    self.entries.insert(key.to_owned(), value);
    Ok(())
  }
}
