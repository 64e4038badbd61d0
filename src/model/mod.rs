//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. These types carry serde and
//! OpenAPI schema derives only; conversion to and from server domain models lives in
//! `server::model`.

pub mod api;
pub mod auth;
pub mod booking;
pub mod country;
pub mod hotel;
