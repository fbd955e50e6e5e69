//! Enum dispatch over the cache backends, plus the settings that select one.

use pessoas_core::cache::PessoaCache;
use serde::Deserialize;
use tracing::info;

use crate::{MemoryCache, NoOpCache, RedisCache, Result};

/// The `[cache]` section of the server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum CacheSettings {
  Redis { url: String },
  #[default]
  Memory,
  None,
}

#[derive(Clone)]
pub enum CacheProvider {
  Redis(RedisCache),
  Memory(MemoryCache),
  NoOp(NoOpCache),
}

impl CacheProvider {
  /// Build the backend named by `settings`. Connecting to Redis happens here,
  /// so an unreachable server fails startup.
  pub async fn from_settings(settings: &CacheSettings) -> Result<Self> {
    let provider = match settings {
      CacheSettings::Redis { url } => Self::Redis(RedisCache::connect(url).await?),
      CacheSettings::Memory => Self::Memory(MemoryCache::new()),
      CacheSettings::None => Self::NoOp(NoOpCache),
    };
    info!(backend = provider.name(), "cache ready");
    Ok(provider)
  }

  pub fn name(&self) -> &'static str {
    match self {
      Self::Redis(_) => "redis",
      Self::Memory(_) => "memory",
      Self::NoOp(_) => "none",
    }
  }
}

impl PessoaCache for CacheProvider {
  type Error = crate::Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    match self {
      Self::Redis(c) => c.get(key).await,
      Self::Memory(c) => c.get(key).await,
      Self::NoOp(c) => c.get(key).await,
    }
  }

  async fn set(&self, key: &str, value: String) -> Result<()> {
    match self {
      Self::Redis(c) => c.set(key, value).await,
      Self::Memory(c) => c.set(key, value).await,
      Self::NoOp(c) => c.set(key, value).await,
    }
  }
}
