//! Server configuration: an optional TOML file overlaid with `PESSOAS__*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use pessoas_cache::CacheSettings;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  #[serde(default)]
  pub cache:      CacheSettings,
}

fn default_host() -> String { "0.0.0.0".into() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("pessoas.db") }

impl ServerConfig {
  /// Load from `path` (if it exists) and the environment. Nested keys use a
  /// double underscore, e.g. `PESSOAS__CACHE__BACKEND=redis`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PESSOAS").separator("__"))
      .build()
      .context("failed to read configuration")?;

    let mut cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/pessoas.toml")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.cache, CacheSettings::Memory);
  }

  #[test]
  fn file_selects_redis_backend() {
    let path = std::env::temp_dir().join(format!("pessoas-{}.toml", std::process::id()));
    std::fs::write(
      &path,
      "port = 9999\n[cache]\nbackend = \"redis\"\nurl = \"redis://cache:6379\"\n",
    )
    .unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.port, 9999);
    assert_eq!(cfg.cache, CacheSettings::Redis { url: "redis://cache:6379".into() });
    assert_eq!(cfg.address(), "0.0.0.0:9999");
  }

  #[test]
  fn tilde_is_expanded() {
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(expand_tilde(Path::new("~/p.db")), PathBuf::from(home).join("p.db"));
    }
    assert_eq!(expand_tilde(Path::new("/abs/p.db")), PathBuf::from("/abs/p.db"));
  }
}
