//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on invalid input.
///
/// Test-only shorthand for `NaiveDate::from_ymd_opt`.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Creates a country and a hotel inside it.
///
/// # Returns
/// - `Ok((country, hotel))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::country::Model, entity::hotel::Model), DbErr> {
    let country = crate::factory::country::create_country(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db, country.id).await?;

    Ok((country, hotel))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (booking owner)
/// 2. Country
/// 3. Hotel
/// 4. Booking (Pending, default dates)
///
/// # Returns
/// - `Ok((user, country, hotel, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::country::Model,
        entity::hotel::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (country, hotel) = create_hotel_with_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, hotel.id, &user.id).await?;

    Ok((user, country, hotel, booking))
}

/// Creates a hotel together with a user assigned as its hotel admin.
///
/// # Returns
/// - `Ok((admin_user, hotel))` - The assigned user and the hotel
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::hotel::Model), DbErr> {
    let admin = crate::factory::user::create_user(db).await?;
    let (_, hotel) = create_hotel_with_dependencies(db).await?;
    crate::factory::hotel_admin::create_hotel_admin(db, &admin.id, hotel.id).await?;

    Ok((admin, hotel))
}
