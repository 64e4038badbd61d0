//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hotel = HotelFactory::new(&db, country.id)
///     .per_night_rate(12_550) // 125.50
///     .rating(4.5)
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    country_id: i32,
    name: String,
    address: String,
    rating: f64,
    per_night_rate: i64,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"`
    /// - address: `"{id} Main Street"`
    /// - rating: `4.0`
    /// - per_night_rate: `10_000` (100.00)
    pub fn new(db: &'a DatabaseConnection, country_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            country_id,
            name: format!("Hotel {}", id),
            address: format!("{} Main Street", id),
            rating: 4.0,
            per_night_rate: 10_000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the nightly rate in minor currency units.
    pub fn per_night_rate(mut self, per_night_rate: i64) -> Self {
        self.per_night_rate = per_night_rate;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            rating: ActiveValue::Set(self.rating),
            per_night_rate: ActiveValue::Set(self.per_night_rate),
            country_id: ActiveValue::Set(self.country_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values in the given country.
pub async fn create_hotel(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db, country_id).build().await
}
