//! Business logic services orchestrating domain operations.
//!
//! Services depend on repository and notifier traits, never on concrete
//! backends, so each one is unit-testable with `mockall` mocks.
//!
//! - [`RestaurantService`] - ranking read model and vote transitions
//! - [`CommentService`] - append-only comment flow
//! - [`RequestService`] - add-a-restaurant request intake

pub mod comment_service;
pub mod request_service;
pub mod restaurant_service;

pub use comment_service::CommentService;
pub use request_service::RequestService;
pub use restaurant_service::{RankedRestaurant, RestaurantService};
