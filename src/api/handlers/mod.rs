//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod comments;
pub mod health;
pub mod request;
pub mod restaurants;
pub mod vote;

pub use comments::add_comment_handler;
pub use health::health_handler;
pub use request::submit_request_handler;
pub use restaurants::list_restaurants_handler;
pub use vote::{downvote_handler, upvote_handler, vote_handler};
