//! DTOs for the vote endpoint.

use crate::domain::vote::VoteChoice;
use serde::Deserialize;

/// A vote direction as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Upvote,
    Downvote,
}

impl From<VoteAction> for VoteChoice {
    fn from(action: VoteAction) -> Self {
        match action {
            VoteAction::Upvote => VoteChoice::Up,
            VoteAction::Downvote => VoteChoice::Down,
        }
    }
}

/// Request body for `POST /api/restaurants/{id}/vote`.
///
/// `previousAction` is the client's remembered prior vote on this
/// restaurant (or null for a fresh vote); the server derives the counter
/// delta from the pair. Unknown action strings are rejected at
/// deserialization with 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub action: VoteAction,
    #[serde(default)]
    pub previous_action: Option<VoteAction>,
}
