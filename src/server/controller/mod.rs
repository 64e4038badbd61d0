//! HTTP request handlers.
//!
//! Handlers check access through `AuthGuard`, convert DTOs into domain parameters,
//! call a service and convert the result back into a DTO.

pub mod auth;
pub mod booking;
pub mod country;
pub mod hotel;
