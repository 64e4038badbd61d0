//! SeaORM entities for the hotel listing database.

pub mod prelude;

pub mod booking;
pub mod country;
pub mod hotel;
pub mod hotel_admin;
pub mod user;
