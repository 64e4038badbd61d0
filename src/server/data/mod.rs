//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Each repository
//! borrows any `ConnectionTrait`, either the pool or an open transaction.

pub mod booking;
pub mod country;
pub mod hotel;
pub mod hotel_admin;
pub mod user;
