//! Booking data repository for database operations.
//!
//! Provides the overlap query used by the booking validator, scoped lookups used by the
//! lifecycle operations and filtered, paginated listings. The repository is generic over
//! `ConnectionTrait` so lifecycle operations can run it inside a transaction.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select, SelectTwo,
};

use crate::server::model::{
    booking::{Booking, BookingFilter, BookingSortField, BookingStatus, CreateBookingParams},
    pagination::PageRequest,
};

use entity::booking::Column;

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the user holds a non-canceled booking at the hotel whose stay
    /// overlaps `[check_in, check_out)`.
    ///
    /// Two stays overlap when `existing.check_in < check_out` and
    /// `existing.check_out > check_in`, so a stay ending on the day another begins does
    /// not overlap it.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel to check
    /// - `check_in` - Requested check-in date
    /// - `check_out` - Requested check-out date
    /// - `user_id` - Owner whose bookings are considered
    /// - `exclude_booking_id` - Booking to ignore, used when changing an existing stay
    ///
    /// # Returns
    /// - `Ok(true)` - At least one overlapping booking exists
    /// - `Ok(false)` - No overlapping booking
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_overlap(
        &self,
        hotel_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        user_id: &str,
        exclude_booking_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(Column::HotelId.eq(hotel_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.ne(BookingStatus::Canceled.as_str()))
            .filter(Column::CheckIn.lt(check_out))
            .filter(Column::CheckOut.gt(check_in));

        if let Some(booking_id) = exclude_booking_id {
            query = query.filter(Column::Id.ne(booking_id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a new Pending booking and returns it with its hotel name.
    ///
    /// # Arguments
    /// - `params` - Booking owner, hotel, dates and guest count
    /// - `total_price` - Price in minor units
    /// - `now` - Creation timestamp
    pub async fn create(
        &self,
        params: &CreateBookingParams,
        total_price: i64,
        now: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        let booking = entity::booking::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            user_id: ActiveValue::Set(params.user_id.clone()),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            guests: ActiveValue::Set(params.guests),
            total_price: ActiveValue::Set(total_price),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            created_at_utc: ActiveValue::Set(now),
            updated_at_utc: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(booking.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Booking with id {} not found after creation",
            booking.id
        )))
    }

    /// Gets a booking by ID regardless of owner or hotel.
    pub async fn get_by_id(&self, booking_id: i32) -> Result<Option<Booking>, DbErr> {
        let result = with_hotel(entity::prelude::Booking::find_by_id(booking_id))
            .one(self.db)
            .await?;

        result
            .map(|(booking, hotel)| Booking::from_entity(booking, hotel))
            .transpose()
    }

    /// Gets a booking only if it belongs to both the hotel and the owner.
    ///
    /// A booking owned by another user is indistinguishable from a missing one.
    pub async fn find_for_owner(
        &self,
        booking_id: i32,
        hotel_id: i32,
        user_id: &str,
    ) -> Result<Option<Booking>, DbErr> {
        let result = with_hotel(
            entity::prelude::Booking::find_by_id(booking_id)
                .filter(Column::HotelId.eq(hotel_id))
                .filter(Column::UserId.eq(user_id)),
        )
        .one(self.db)
        .await?;

        result
            .map(|(booking, hotel)| Booking::from_entity(booking, hotel))
            .transpose()
    }

    /// Gets a booking only if it belongs to the hotel.
    pub async fn find_in_hotel(
        &self,
        booking_id: i32,
        hotel_id: i32,
    ) -> Result<Option<Booking>, DbErr> {
        let result = with_hotel(
            entity::prelude::Booking::find_by_id(booking_id).filter(Column::HotelId.eq(hotel_id)),
        )
        .one(self.db)
        .await?;

        result
            .map(|(booking, hotel)| Booking::from_entity(booking, hotel))
            .transpose()
    }

    /// Replaces the stay of a booking and stamps `updated_at_utc`.
    pub async fn update_stay(
        &self,
        booking_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        total_price: i64,
        now: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Unchanged(booking_id),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(check_out),
            guests: ActiveValue::Set(guests),
            total_price: ActiveValue::Set(total_price),
            updated_at_utc: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(booking_id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Booking with id {} not found after update",
            booking_id
        )))
    }

    /// Writes a new status and stamps `updated_at_utc`.
    ///
    /// The caller is responsible for validating the transition.
    pub async fn update_status(
        &self,
        booking_id: i32,
        status: BookingStatus,
        now: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Unchanged(booking_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at_utc: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(booking_id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Booking with id {} not found after status change",
            booking_id
        )))
    }

    /// Gets a filtered page of bookings at a hotel.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose bookings are listed
    /// - `user_id` - Restricts the listing to one owner when `Some`
    /// - `filter` - Status, date, price and guest filters plus ordering
    /// - `page` - Page selection
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Bookings on the page and total matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        hotel_id: i32,
        user_id: Option<&str>,
        filter: &BookingFilter,
        page: PageRequest,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find().filter(Column::HotelId.eq(hotel_id));

        if let Some(user_id) = user_id {
            query = query.filter(Column::UserId.eq(user_id));
        }

        let query = apply_sort(apply_filter(query, filter), filter);

        let paginator = with_hotel(query).paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page.page_index())
            .await?
            .into_iter()
            .map(|(booking, hotel)| Booking::from_entity(booking, hotel))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, total))
    }
}

fn with_hotel(
    query: Select<entity::booking::Entity>,
) -> SelectTwo<entity::booking::Entity, entity::hotel::Entity> {
    query.find_also_related(entity::prelude::Hotel)
}

fn apply_filter(
    mut query: Select<entity::booking::Entity>,
    filter: &BookingFilter,
) -> Select<entity::booking::Entity> {
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status.as_str()));
    }
    if let Some(from) = filter.check_in_from {
        query = query.filter(Column::CheckIn.gte(from));
    }
    if let Some(to) = filter.check_in_to {
        query = query.filter(Column::CheckIn.lte(to));
    }
    if let Some(from) = filter.check_out_from {
        query = query.filter(Column::CheckOut.gte(from));
    }
    if let Some(to) = filter.check_out_to {
        query = query.filter(Column::CheckOut.lte(to));
    }
    if let Some(min) = filter.min_price {
        query = query.filter(Column::TotalPrice.gte(min));
    }
    if let Some(max) = filter.max_price {
        query = query.filter(Column::TotalPrice.lte(max));
    }
    if let Some(min) = filter.min_guests {
        query = query.filter(Column::Guests.gte(min));
    }
    if let Some(max) = filter.max_guests {
        query = query.filter(Column::Guests.lte(max));
    }

    query
}

fn apply_sort(
    query: Select<entity::booking::Entity>,
    filter: &BookingFilter,
) -> Select<entity::booking::Entity> {
    let Some((field, descending)) = filter.sort else {
        return query
            .order_by_asc(Column::CheckIn)
            .order_by_asc(Column::Id);
    };

    let column = match field {
        BookingSortField::CheckIn => Column::CheckIn,
        BookingSortField::CheckOut => Column::CheckOut,
        BookingSortField::Price => Column::TotalPrice,
        BookingSortField::Guests => Column::Guests,
        BookingSortField::CreatedAt => Column::CreatedAtUtc,
    };

    let query = if descending {
        query.order_by_desc(column)
    } else {
        query.order_by_asc(column)
    };

    query.order_by_asc(Column::Id)
}
