//! Vote transition state machine and score derivation.

/// A client's vote direction on a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    Up,
    Down,
}

/// Counter delta produced by a vote transition.
///
/// Applied as a single atomic increment operation at the storage layer, so
/// concurrent votes on the same restaurant never lose an update. Every delta
/// satisfies `score == upvotes - downvotes`, which preserves the stored
/// invariant by induction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta {
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

impl VoteDelta {
    const ZERO: VoteDelta = VoteDelta {
        upvotes: 0,
        downvotes: 0,
        score: 0,
    };

    /// Returns true when the transition changes nothing and the storage
    /// write can be skipped entirely.
    pub fn is_noop(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Computes the counter delta for a vote transition.
///
/// Complete state machine over `(previous, choice)`:
///
/// | previous | choice | delta (up, down, score) |
/// |----------|--------|-------------------------|
/// | none     | up     | (+1,  0, +1)            |
/// | none     | down   | ( 0, +1, -1)            |
/// | up       | up     | ( 0,  0,  0)            |
/// | down     | down   | ( 0,  0,  0)            |
/// | up       | down   | (-1, +1, -2)            |
/// | down     | up     | (+1, -1, +2)            |
///
/// Repeating the same vote is idempotent; switching sides moves one count
/// across and shifts the score by two.
pub fn transition(previous: Option<VoteChoice>, choice: VoteChoice) -> VoteDelta {
    match (previous, choice) {
        (None, VoteChoice::Up) => VoteDelta {
            upvotes: 1,
            downvotes: 0,
            score: 1,
        },
        (None, VoteChoice::Down) => VoteDelta {
            upvotes: 0,
            downvotes: 1,
            score: -1,
        },
        (Some(prev), next) if prev == next => VoteDelta::ZERO,
        (Some(VoteChoice::Down), VoteChoice::Up) => VoteDelta {
            upvotes: 1,
            downvotes: -1,
            score: 2,
        },
        (Some(VoteChoice::Up), VoteChoice::Down) => VoteDelta {
            upvotes: -1,
            downvotes: 1,
            score: -2,
        },
        // Unreachable: the guard above covers the equal cases.
        (Some(_), _) => VoteDelta::ZERO,
    }
}
