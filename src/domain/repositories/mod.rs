//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RestaurantRepository`] - Catalog reads and atomic vote updates
//! - [`CommentRepository`] - Append-only comment storage

pub mod comment_repository;
pub mod restaurant_repository;

pub use comment_repository::CommentRepository;
pub use restaurant_repository::RestaurantRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
