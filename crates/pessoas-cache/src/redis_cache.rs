//! Redis-backed cache using plain `GET` / `SET` with no expiry.

use pessoas_core::cache::PessoaCache;
use redis::{AsyncCommands as _, aio::ConnectionManager};

use crate::{Error, Result};

/// Cloning is cheap; all clones multiplex over one managed connection that
/// reconnects on failure.
#[derive(Clone)]
pub struct RedisCache {
  conn: ConnectionManager,
}

impl RedisCache {
  /// Connect to the server at `url` (e.g. `redis://redis:6379`).
  pub async fn connect(url: &str) -> Result<Self> {
    let client = redis::Client::open(url)?;
    let conn = ConnectionManager::new(client).await?;
    Ok(Self { conn })
  }
}

impl PessoaCache for RedisCache {
  type Error = Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let mut conn = self.conn.clone();
    let value: Option<String> = conn.get(key).await?;
    Ok(value)
  }

  async fn set(&self, key: &str, value: String) -> Result<()> {
    let mut conn = self.conn.clone();
    conn.set::<_, _, ()>(key, value).await?;
    Ok(())
  }
}
