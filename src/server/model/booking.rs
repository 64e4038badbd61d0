//! Booking domain models and parameters.
//!
//! Provides the booking status state machine, the booking domain model and the
//! parameter types used by the booking lifecycle and listing operations.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::{
    model::booking::{BookingDto, BookingFilterQuery, CreateBookingDto, UpdateBookingDto},
    server::{
        error::AppError,
        util::money::{from_minor_units, to_minor_units},
    },
};

/// Lifecycle status of a booking.
///
/// Transitions are monotonic: Pending → Confirmed, Pending → Canceled and
/// Confirmed → Canceled. Canceled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Canceled => "Canceled",
        }
    }

    /// Whether the status machine permits moving from `self` to `next`.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Canceled)
                | (Self::Confirmed, Self::Canceled)
        )
    }

    /// Moves to `next`, or fails without changing anything.
    ///
    /// # Returns
    /// - `Ok(BookingStatus)` - The new status
    /// - `Err(AppError::Conflict)` - Transition not permitted from the current status
    pub fn transition_to(self, next: BookingStatus) -> Result<BookingStatus, AppError> {
        if self.can_transition_to(next) {
            return Ok(next);
        }

        let message = match (self, next) {
            (Self::Canceled, Self::Canceled) => "Booking is already canceled".to_string(),
            (Self::Confirmed, Self::Confirmed) => "Booking is already confirmed".to_string(),
            (Self::Canceled, _) => "Canceled bookings cannot be changed".to_string(),
            (from, to) => format!("Cannot change booking status from {} to {}", from, to),
        };

        Err(AppError::Conflict(message))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    /// Parses a status name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            other => Err(format!("Unknown booking status '{}'", other)),
        }
    }
}

/// Booking domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub hotel_id: i32,
    pub hotel_name: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: Option<DateTime<Utc>>,
}

impl Booking {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The booking entity from the database
    /// - `hotel` - The booking's hotel, if it was loaded alongside
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known status
    pub fn from_entity(
        entity: entity::booking::Model,
        hotel: Option<entity::hotel::Model>,
    ) -> Result<Self, DbErr> {
        let status = entity.status.parse::<BookingStatus>().map_err(|e| {
            DbErr::Custom(format!("Booking {} has invalid status: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            hotel_name: hotel.map(|h| h.name).unwrap_or_default(),
            user_id: entity.user_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guests: entity.guests,
            total_price: from_minor_units(entity.total_price),
            status,
            created_at_utc: entity.created_at_utc,
            updated_at_utc: entity.updated_at_utc,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            hotel_id: self.hotel_id,
            hotel_name: self.hotel_name,
            guests: self.guests,
            check_in: self.check_in,
            check_out: self.check_out,
            total_price: self.total_price,
            status: self.status.to_string(),
            created_at_utc: self.created_at_utc,
            updated_at_utc: self.updated_at_utc,
        }
    }
}

/// Parameters for creating a booking on behalf of the acting user.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub hotel_id: i32,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl CreateBookingParams {
    pub fn from_dto(hotel_id: i32, user_id: String, dto: CreateBookingDto) -> Self {
        Self {
            hotel_id,
            user_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
        }
    }
}

/// Parameters for changing the stay of an existing booking.
#[derive(Debug, Clone)]
pub struct UpdateBookingParams {
    pub hotel_id: i32,
    pub booking_id: i32,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl UpdateBookingParams {
    pub fn from_dto(hotel_id: i32, booking_id: i32, user_id: String, dto: UpdateBookingDto) -> Self {
        Self {
            hotel_id,
            booking_id,
            user_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
        }
    }
}

/// Column a booking listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSortField {
    CheckIn,
    CheckOut,
    Price,
    Guests,
    CreatedAt,
}

impl BookingSortField {
    /// Parses a `sort_by` query value; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "checkin" => Some(Self::CheckIn),
            "checkout" => Some(Self::CheckOut),
            "price" => Some(Self::Price),
            "guests" => Some(Self::Guests),
            "createdatutc" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Filters and ordering for booking listings.
///
/// With no `sort` the listing is ordered by check-in ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub check_in_from: Option<NaiveDate>,
    pub check_in_to: Option<NaiveDate>,
    pub check_out_from: Option<NaiveDate>,
    pub check_out_to: Option<NaiveDate>,
    /// Lower bound on the total price, in minor units.
    pub min_price: Option<i64>,
    /// Upper bound on the total price, in minor units.
    pub max_price: Option<i64>,
    pub min_guests: Option<i32>,
    pub max_guests: Option<i32>,
    /// Sort column and whether to sort descending.
    pub sort: Option<(BookingSortField, bool)>,
}

impl BookingFilter {
    /// Builds a filter from query parameters.
    ///
    /// # Returns
    /// - `Ok(BookingFilter)` - Parsed filter
    /// - `Err(AppError::Validation)` - Unknown status value or out of range price bound
    pub fn from_query(query: BookingFilterQuery) -> Result<Self, AppError> {
        let status = query
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<BookingStatus>)
            .transpose()
            .map_err(AppError::Validation)?;

        let sort = query
            .sort_by
            .as_deref()
            .and_then(BookingSortField::parse)
            .map(|field| (field, query.is_sort_descending.unwrap_or(true)));

        Ok(Self {
            status,
            check_in_from: query.check_in_from,
            check_in_to: query.check_in_to,
            check_out_from: query.check_out_from,
            check_out_to: query.check_out_to,
            min_price: query.min_price.map(to_minor_units).transpose()?,
            max_price: query.max_price.map(to_minor_units).transpose()?,
            min_guests: query.min_guests,
            max_guests: query.max_guests,
            sort,
        })
    }
}
