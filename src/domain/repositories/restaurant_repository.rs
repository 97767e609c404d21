//! Repository trait for restaurant catalog data access.

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::domain::vote::VoteDelta;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the restaurant catalog.
///
/// Provides the ranking read model and the atomic vote-counter update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryCatalog`] - in-memory test harness
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Adds a restaurant to the catalog with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError>;

    /// Finds a restaurant by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Restaurant))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Lists the whole catalog ordered by descending score.
    ///
    /// Ties are broken by ascending id, which matches insertion order since
    /// ids are assigned sequentially.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_score(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Applies a vote delta to a restaurant's counters as one atomic
    /// increment operation.
    ///
    /// Never performs a read-modify-write from application memory, so
    /// concurrent votes on the same restaurant cannot lose an update.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Restaurant))` with the post-update row if found
    /// - `Ok(None)` if no restaurant matches `id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn apply_vote(&self, id: i64, delta: VoteDelta) -> Result<Option<Restaurant>, AppError>;

    /// Counts catalog entries.
    ///
    /// Used by the health check and the seed CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Removes every catalog entry (and, via cascade, every comment).
    ///
    /// Only used by the seed CLI when reseeding.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
