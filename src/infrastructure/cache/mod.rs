//! Ranking cache abstractions.
//!
//! The ranking view is the hot read path; its serialized JSON is cached
//! under a single key and invalidated on every vote or comment mutation.
//!
//! # Implementations
//!
//! - [`RedisCache`] - Redis-backed cache with TTL support
//! - [`NullCache`] - no-op used when Redis is unconfigured or unreachable

pub mod null_cache;
pub mod redis_cache;
pub mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
