//! A cache that stores nothing. Every read misses.

use pessoas_core::cache::PessoaCache;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

impl PessoaCache for NoOpCache {
  type Error = Error;

  async fn get(&self, _key: &str) -> Result<Option<String>> { Ok(None) }

  async fn set(&self, _key: &str, _value: String) -> Result<()> { Ok(()) }
}
