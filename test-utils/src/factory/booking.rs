//! Booking factory for creating test booking entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::date;

/// Factory for creating test bookings with customizable fields.
///
/// The factory writes rows directly and does not apply any business rules, so
/// it can be used to set up states (overlaps, canceled bookings) that the
/// service layer would refuse to create.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, hotel.id, &user.id)
///     .dates(date(2025, 6, 1), date(2025, 6, 4))
///     .guests(2)
///     .status("Canceled")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    user_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    total_price: i64,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: `2025-06-01`
    /// - check_out: `2025-06-04`
    /// - guests: `2`
    /// - total_price: `30_000` (300.00)
    /// - status: `"Pending"`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32, user_id: impl Into<String>) -> Self {
        Self {
            db,
            hotel_id,
            user_id: user_id.into(),
            check_in: date(2025, 6, 1),
            check_out: date(2025, 6, 4),
            guests: 2,
            total_price: 30_000,
            status: "Pending".to_string(),
        }
    }

    /// Sets the check-in and check-out dates.
    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the total price in minor currency units.
    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            guests: ActiveValue::Set(self.guests),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at_utc: ActiveValue::Set(Utc::now()),
            updated_at_utc: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Pending booking with default dates for the given hotel and user.
pub async fn create_booking(
    db: &DatabaseConnection,
    hotel_id: i32,
    user_id: &str,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, hotel_id, user_id).build().await
}
