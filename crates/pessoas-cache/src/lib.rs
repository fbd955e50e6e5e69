//! Cache backends for the pessoas service.
//!
//! ```text
//! CacheProvider (enum)       <- chosen once at startup from CacheSettings
//!   ├── Redis(RedisCache)    <- ConnectionManager-based async Redis
//!   ├── Memory(MemoryCache)  <- in-process concurrent map
//!   └── NoOp(NoOpCache)      <- always miss, writes succeed
//! ```
//!
//! None of the backends expire entries.

mod memory;
mod noop;
mod provider;
mod redis_cache;

pub mod error;

pub use error::{Error, Result};
pub use memory::MemoryCache;
pub use noop::NoOpCache;
pub use provider::{CacheProvider, CacheSettings};
pub use redis_cache::RedisCache;
