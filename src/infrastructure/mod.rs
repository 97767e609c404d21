//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for persistence, caching, and notification.
//!
//! # Modules
//!
//! - [`cache`] - Ranking cache abstractions (Redis and no-op implementations)
//! - [`notify`] - Request notification channel (webhook and log-only)
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod cache;
pub mod notify;
pub mod persistence;
