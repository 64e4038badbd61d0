//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules and map their outcomes to
//! `AppError`. Controllers only translate between HTTP and these services.

pub mod auth;
pub mod authorization;
pub mod booking;
pub mod country;
pub mod hotel;
pub mod pricing;
