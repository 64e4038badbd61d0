//! Booking lifecycle service.
//!
//! Creates, changes, cancels and confirms bookings. Every operation receives the acting
//! user's ID explicitly. Create and update run the overlap check and the write inside
//! one transaction so two requests cannot both pass the check for the same dates.

use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::AppError,
    model::{
        booking::{Booking, BookingFilter, BookingStatus, CreateBookingParams, UpdateBookingParams},
        pagination::{PageRequest, Paged},
    },
    service::{authorization::AuthorizationService, pricing},
    util::money::to_minor_units,
};

pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 10;

const OVERLAP_MESSAGE: &str = "You already have a booking that overlaps with the selected dates";

/// Validates the dates and guest count of a stay.
///
/// # Returns
/// - `Ok(())` - Check-out is after check-in and guests are within `MIN_GUESTS..=MAX_GUESTS`
/// - `Err(AppError::Validation)` - Otherwise
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate, guests: i32) -> Result<(), AppError> {
    if check_out <= check_in {
        return Err(AppError::Validation(
            "Check-out date must be after the check-in date".to_string(),
        ));
    }

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(AppError::Validation(format!(
            "Guests must be between {} and {}",
            MIN_GUESTS, MAX_GUESTS
        )));
    }

    Ok(())
}

/// Checks whether the user already holds a non-canceled booking at the hotel that
/// overlaps the stay, ignoring `exclude_booking_id` when given.
/// Must run on the transaction that performs the following write.
pub async fn has_overlap<C: ConnectionTrait>(
    db: &C,
    hotel_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    user_id: &str,
    exclude_booking_id: Option<i32>,
) -> Result<bool, AppError> {
    Ok(BookingRepository::new(db)
        .has_overlap(hotel_id, check_in, check_out, user_id, exclude_booking_id)
        .await?)
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a Pending booking for the acting user.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Created booking priced at the hotel's nightly rate
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    /// - `Err(AppError::Validation)` - Invalid dates or guest count
    /// - `Err(AppError::Conflict)` - Stay overlaps another of the user's bookings
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        require_acting_user(&params.user_id)?;

        let txn = self.db.begin().await?;

        let hotel = HotelRepository::new(&txn)
            .get_by_id(params.hotel_id)
            .await?
            .ok_or_else(|| hotel_not_found(params.hotel_id))?;

        validate_stay(params.check_in, params.check_out, params.guests)?;

        let booking_repo = BookingRepository::new(&txn);

        if has_overlap(
            &txn,
            params.hotel_id,
            params.check_in,
            params.check_out,
            &params.user_id,
            None,
        )
        .await?
        {
            return Err(AppError::Conflict(OVERLAP_MESSAGE.to_string()));
        }

        let price = pricing::compute_price(params.check_in, params.check_out, hotel.per_night_rate);
        let booking = booking_repo
            .create(&params, to_minor_units(price)?, Utc::now())
            .await?;

        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            hotel_id = booking.hotel_id,
            user_id = %booking.user_id,
            "Created booking"
        );

        Ok(booking)
    }

    /// Changes the dates and guest count of one of the acting user's bookings.
    ///
    /// The overlap check runs first and ignores the booking being changed. Canceled
    /// bookings are rejected before the payload is validated.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Updated booking with recomputed price
    /// - `Err(AppError::Conflict)` - New stay overlaps another booking, or booking is canceled
    /// - `Err(AppError::NotFound)` - No such booking for this hotel and user
    /// - `Err(AppError::Validation)` - Invalid dates or guest count
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Booking, AppError> {
        require_acting_user(&params.user_id)?;

        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);

        if has_overlap(
            &txn,
            params.hotel_id,
            params.check_in,
            params.check_out,
            &params.user_id,
            Some(params.booking_id),
        )
        .await?
        {
            return Err(AppError::Conflict(OVERLAP_MESSAGE.to_string()));
        }

        let booking = booking_repo
            .find_for_owner(params.booking_id, params.hotel_id, &params.user_id)
            .await?
            .ok_or_else(|| booking_not_found(params.booking_id))?;

        if booking.status == BookingStatus::Canceled {
            return Err(AppError::Conflict(
                "Cannot update a canceled booking".to_string(),
            ));
        }

        validate_stay(params.check_in, params.check_out, params.guests)?;

        let hotel = HotelRepository::new(&txn)
            .get_by_id(booking.hotel_id)
            .await?
            .ok_or_else(|| hotel_not_found(booking.hotel_id))?;

        let price = pricing::compute_price(params.check_in, params.check_out, hotel.per_night_rate);
        let updated = booking_repo
            .update_stay(
                booking.id,
                params.check_in,
                params.check_out,
                params.guests,
                to_minor_units(price)?,
                Utc::now(),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(booking_id = updated.id, "Updated booking");

        Ok(updated)
    }

    /// Cancels one of the acting user's bookings.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Canceled booking
    /// - `Err(AppError::Validation)` - No acting user
    /// - `Err(AppError::NotFound)` - No such booking for this hotel and user
    /// - `Err(AppError::Conflict)` - Booking is already canceled
    pub async fn cancel(
        &self,
        hotel_id: i32,
        booking_id: i32,
        user_id: &str,
    ) -> Result<Booking, AppError> {
        require_acting_user(user_id)?;

        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);

        let booking = booking_repo
            .find_for_owner(booking_id, hotel_id, user_id)
            .await?
            .ok_or_else(|| booking_not_found(booking_id))?;

        let booking = transition(&booking_repo, booking, BookingStatus::Canceled).await?;

        txn.commit().await?;

        tracing::info!(booking_id, user_id, "Booking canceled by owner");

        Ok(booking)
    }

    /// Cancels any booking of a hotel on behalf of one of its administrators.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Canceled booking
    /// - `Err(AppError::Forbidden)` - Acting user does not administer the hotel
    /// - `Err(AppError::NotFound)` - No such booking at this hotel
    /// - `Err(AppError::Conflict)` - Booking is already canceled
    pub async fn cancel_by_admin(
        &self,
        hotel_id: i32,
        booking_id: i32,
        user_id: &str,
    ) -> Result<Booking, AppError> {
        let booking = self
            .admin_transition(hotel_id, booking_id, user_id, BookingStatus::Canceled)
            .await?;

        tracing::info!(booking_id, user_id, "Booking canceled by hotel admin");

        Ok(booking)
    }

    /// Confirms a Pending booking on behalf of one of the hotel's administrators.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Confirmed booking
    /// - `Err(AppError::Forbidden)` - Acting user does not administer the hotel
    /// - `Err(AppError::NotFound)` - No such booking at this hotel
    /// - `Err(AppError::Conflict)` - Booking is canceled or already confirmed
    pub async fn confirm_by_admin(
        &self,
        hotel_id: i32,
        booking_id: i32,
        user_id: &str,
    ) -> Result<Booking, AppError> {
        let booking = self
            .admin_transition(hotel_id, booking_id, user_id, BookingStatus::Confirmed)
            .await?;

        tracing::info!(booking_id, user_id, "Booking confirmed by hotel admin");

        Ok(booking)
    }

    /// Gets the acting user's bookings at a hotel.
    ///
    /// # Returns
    /// - `Ok(Paged<Booking>)` - Matching bookings for the requested page
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    pub async fn get_user_bookings(
        &self,
        hotel_id: i32,
        user_id: &str,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<Paged<Booking>, AppError> {
        require_acting_user(user_id)?;

        self.get_paginated(hotel_id, Some(user_id), filter, page)
            .await
    }

    /// Gets every booking at a hotel. Access is checked by the caller.
    ///
    /// # Returns
    /// - `Ok(Paged<Booking>)` - Matching bookings for the requested page
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    pub async fn get_hotel_bookings(
        &self,
        hotel_id: i32,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<Paged<Booking>, AppError> {
        self.get_paginated(hotel_id, None, filter, page).await
    }

    async fn get_paginated(
        &self,
        hotel_id: i32,
        user_id: Option<&str>,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<Paged<Booking>, AppError> {
        if !HotelRepository::new(self.db).exists(hotel_id).await? {
            return Err(hotel_not_found(hotel_id));
        }

        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated(hotel_id, user_id, &filter, page)
            .await?;

        Ok(Paged::new(bookings, total, page))
    }

    /// Admin check, hotel scoped lookup and status transition shared by the admin operations.
    ///
    /// The admin check runs before the lookup so non-admins never learn whether a booking exists.
    async fn admin_transition(
        &self,
        hotel_id: i32,
        booking_id: i32,
        user_id: &str,
        next: BookingStatus,
    ) -> Result<Booking, AppError> {
        require_acting_user(user_id)?;

        let txn = self.db.begin().await?;

        AuthorizationService::new(&txn)
            .require_hotel_admin(hotel_id, user_id)
            .await?;

        let booking_repo = BookingRepository::new(&txn);

        let booking = booking_repo
            .find_in_hotel(booking_id, hotel_id)
            .await?
            .ok_or_else(|| booking_not_found(booking_id))?;

        let booking = transition(&booking_repo, booking, next).await?;

        txn.commit().await?;

        Ok(booking)
    }
}

/// Applies a status transition, writing only when the state machine allows it.
async fn transition<C: ConnectionTrait>(
    repo: &BookingRepository<'_, C>,
    booking: Booking,
    next: BookingStatus,
) -> Result<Booking, AppError> {
    let status = booking.status.transition_to(next)?;

    Ok(repo.update_status(booking.id, status, Utc::now()).await?)
}

fn require_acting_user(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("User is not authenticated".to_string()));
    }

    Ok(())
}

fn hotel_not_found(hotel_id: i32) -> AppError {
    AppError::NotFound(format!("Hotel '{}' was not found", hotel_id))
}

fn booking_not_found(booking_id: i32) -> AppError {
    AppError::NotFound(format!("Booking '{}' was not found", booking_id))
}
