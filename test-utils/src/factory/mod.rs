//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as constructor
//! arguments, and the `helpers` module creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let country = factory::create_country(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, country, hotel, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, hotel.id, &user.id)
//!     .dates(date(2025, 6, 1), date(2025, 6, 4))
//!     .status("Confirmed")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `country` - Create country entities
//! - `hotel` - Create hotel entities
//! - `hotel_admin` - Create hotel admin assignments
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod country;
pub mod helpers;
pub mod hotel;
pub mod hotel_admin;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use country::create_country;
pub use hotel::create_hotel;
pub use hotel_admin::create_hotel_admin;
pub use user::create_user;
