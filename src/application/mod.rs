//! Application layer containing business logic services.
//!
//! Services coordinate between the API layer and domain repositories,
//! implementing the use cases of the ranking service.

pub mod services;
