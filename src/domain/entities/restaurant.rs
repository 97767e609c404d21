//! Restaurant entity carrying vote counters and catalog metadata.

use chrono::{DateTime, Utc};

/// A votable restaurant in the catalog.
///
/// Carries the vote counter pair and the derived score. The storage layer
/// maintains `score == upvotes - downvotes` by applying vote deltas as
/// single atomic increments.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub website: String,
    pub image_url: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Creates a new Restaurant instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        description: String,
        website: String,
        image_url: String,
        upvotes: i64,
        downvotes: i64,
        score: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            website,
            image_url,
            upvotes,
            downvotes,
            score,
            created_at,
            updated_at,
        }
    }

    /// Returns true while the stored score matches the counter pair.
    pub fn has_consistent_tally(&self) -> bool {
        self.score == self.upvotes - self.downvotes
    }

    /// Total number of votes cast, regardless of direction.
    pub fn total_votes(&self) -> i64 {
        self.upvotes + self.downvotes
    }
}

/// Input data for adding a restaurant to the catalog.
///
/// Counters start at zero; timestamps are set by the storage layer.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub website: String,
    pub image_url: String,
}
