//! Hotel catalogue and hotel admin assignment.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        country::CountryRepository, hotel::HotelRepository, hotel_admin::HotelAdminRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        hotel::{CreateHotelParams, Hotel, HotelAdmin, HotelFilter, UpdateHotelParams},
        pagination::{PageRequest, Paged},
    },
    util::money::to_minor_units,
};

pub const MAX_RATING: f64 = 5.0;

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: HotelFilter,
        page: PageRequest,
    ) -> Result<Paged<Hotel>, AppError> {
        let (hotels, total) = HotelRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Paged::new(hotels, total, page))
    }

    /// Gets a hotel with its country name.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Hotel found
    /// - `Err(AppError::NotFound)` - No hotel with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        HotelRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| hotel_not_found(id))
    }

    /// Creates a hotel in an existing country.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Created hotel
    /// - `Err(AppError::Validation)` - Blank name or address, rating or rate out of range
    /// - `Err(AppError::NotFound)` - Country does not exist
    /// - `Err(AppError::Conflict)` - Country already has a hotel with that name
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        validate_hotel(&params.name, &params.address, params.rating, params.per_night_rate)?;

        let txn = self.db.begin().await?;

        if !CountryRepository::new(&txn).exists(params.country_id).await? {
            return Err(country_not_found(params.country_id));
        }

        let hotel_repo = HotelRepository::new(&txn);

        if hotel_repo
            .name_exists_in_country(&params.name, params.country_id, None)
            .await?
        {
            return Err(duplicate_name(&params.name));
        }

        let rate = to_minor_units(params.per_night_rate)?;
        let hotel = hotel_repo.create(params, rate).await?;

        txn.commit().await?;

        tracing::info!(hotel_id = hotel.id, name = %hotel.name, "Created hotel");

        Ok(hotel)
    }

    /// Replaces every field of a hotel.
    ///
    /// # Arguments
    /// - `id` - Hotel ID from the route, must match `params.id`
    /// - `params` - New hotel fields
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Updated hotel
    /// - `Err(AppError::Validation)` - ID mismatch or invalid fields
    /// - `Err(AppError::NotFound)` - Hotel or country does not exist
    /// - `Err(AppError::Conflict)` - Another hotel in the country has that name
    pub async fn update(&self, id: i32, params: UpdateHotelParams) -> Result<Hotel, AppError> {
        if id != params.id {
            return Err(AppError::Validation(
                "Route ID does not match the hotel ID in the body".to_string(),
            ));
        }

        validate_hotel(&params.name, &params.address, params.rating, params.per_night_rate)?;

        let txn = self.db.begin().await?;
        let hotel_repo = HotelRepository::new(&txn);

        if !hotel_repo.exists(id).await? {
            return Err(hotel_not_found(id));
        }

        if !CountryRepository::new(&txn).exists(params.country_id).await? {
            return Err(country_not_found(params.country_id));
        }

        if hotel_repo
            .name_exists_in_country(&params.name, params.country_id, Some(id))
            .await?
        {
            return Err(duplicate_name(&params.name));
        }

        let rate = to_minor_units(params.per_night_rate)?;
        let hotel = hotel_repo.update(params, rate).await?;

        txn.commit().await?;

        tracing::info!(hotel_id = hotel.id, "Updated hotel");

        Ok(hotel)
    }

    /// Deletes a hotel together with its bookings and admin assignments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !HotelRepository::new(self.db).delete(id).await? {
            return Err(hotel_not_found(id));
        }

        tracing::info!(hotel_id = id, "Deleted hotel");

        Ok(())
    }

    /// Assigns a registered user, looked up by email, as administrator of a hotel.
    ///
    /// # Returns
    /// - `Ok(HotelAdmin)` - The new assignment
    /// - `Err(AppError::NotFound)` - Hotel or user does not exist
    /// - `Err(AppError::Conflict)` - User already administers the hotel
    pub async fn assign_admin(&self, hotel_id: i32, email: &str) -> Result<HotelAdmin, AppError> {
        let email = email.trim().to_lowercase();

        let txn = self.db.begin().await?;

        if !HotelRepository::new(&txn).exists(hotel_id).await? {
            return Err(hotel_not_found(hotel_id));
        }

        let user = UserRepository::new(&txn)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' was not found", email)))?;

        let admin_repo = HotelAdminRepository::new(&txn);

        if admin_repo.is_hotel_admin(hotel_id, &user.id).await? {
            return Err(AppError::Conflict(format!(
                "User '{}' is already an admin of this hotel",
                email
            )));
        }

        admin_repo.create(hotel_id, &user.id).await?;

        txn.commit().await?;

        tracing::info!(hotel_id, user_id = %user.id, "Assigned hotel admin");

        Ok(HotelAdmin {
            hotel_id,
            user_id: user.id,
            email: user.email,
        })
    }

    /// Gets the administrators of a hotel.
    pub async fn get_admins(&self, hotel_id: i32) -> Result<Vec<HotelAdmin>, AppError> {
        if !HotelRepository::new(self.db).exists(hotel_id).await? {
            return Err(hotel_not_found(hotel_id));
        }

        Ok(HotelAdminRepository::new(self.db)
            .get_by_hotel(hotel_id)
            .await?)
    }
}

fn validate_hotel(name: &str, address: &str, rating: f64, rate: Decimal) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("Hotel name is required".to_string()));
    }
    if address.is_empty() {
        return Err(AppError::Validation("Hotel address is required".to_string()));
    }
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between 0 and {}",
            MAX_RATING
        )));
    }
    if rate.is_sign_negative() {
        return Err(AppError::Validation(
            "Per night rate cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn hotel_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Hotel '{}' was not found", id))
}

fn country_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Country '{}' was not found", id))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!(
        "A hotel named '{}' already exists in this country",
        name
    ))
}
