//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgRestaurantRepository`] / [`PgCommentRepository`] - PostgreSQL via sqlx;
//!   vote deltas are applied with single atomic `UPDATE` increments
//! - [`InMemoryCatalog`] - lock-guarded in-memory backend used as the
//!   hermetic test harness; implements both traits

pub mod memory;
pub mod pg_comment_repository;
pub mod pg_restaurant_repository;

pub use memory::InMemoryCatalog;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
