use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PagedResultDto, PaginationQuery},
        booking::{BookingDto, BookingFilterQuery, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            booking::{Booking, BookingFilter, CreateBookingParams, UpdateBookingParams},
            pagination::PageRequest,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get the authenticated user's bookings at a hotel.
///
/// # Access Control
/// - Any authenticated user; only their own bookings are returned
///
/// # Returns
/// - `200 OK` - Paged list of bookings
/// - `400 Bad Request` - Unknown status filter or price bound out of range
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Hotel not found
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        PaginationQuery,
        BookingFilterQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PagedResultDto<BookingDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
    Query(filter): Query<BookingFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bookings = service
        .get_user_bookings(
            hotel_id,
            &user.id,
            BookingFilter::from_query(filter)?,
            PageRequest::from(pagination),
        )
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto(Booking::into_dto))))
}

/// Get every booking at a hotel.
///
/// # Access Control
/// - `HotelOrSystemAdmin` - Admins of the hotel and system administrators
///
/// # Returns
/// - `200 OK` - Paged list of bookings
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not administer the hotel
/// - `404 Not Found` - Hotel not found
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_id}/bookings/admin",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        PaginationQuery,
        BookingFilterQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PagedResultDto<BookingDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not administer the hotel", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
    Query(filter): Query<BookingFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HotelOrSystemAdmin(hotel_id)])
        .await?;

    let service = BookingService::new(&state.db);

    let bookings = service
        .get_hotel_bookings(
            hotel_id,
            BookingFilter::from_query(filter)?,
            PageRequest::from(pagination),
        )
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto(Booking::into_dto))))
}

/// Book a stay at a hotel.
///
/// The booking starts as Pending and is priced at the hotel's nightly rate.
///
/// # Returns
/// - `201 Created` - Booking created
/// - `400 Bad Request` - Check-out not after check-in, or guests outside 1..=10
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Hotel not found
/// - `409 Conflict` - Stay overlaps another of the user's bookings
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 409, description = "Overlapping booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .create(CreateBookingParams::from_dto(hotel_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Change the dates and guest count of one of the user's bookings.
///
/// # Returns
/// - `200 OK` - Booking updated and repriced
/// - `400 Bad Request` - Invalid dates or guest count
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Booking not found for this hotel and user
/// - `409 Conflict` - Overlapping stay, or booking is canceled
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_id}/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Overlapping or canceled booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path((hotel_id, booking_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .update(UpdateBookingParams::from_dto(
            hotel_id, booking_id, user.id, payload,
        ))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel one of the user's bookings.
///
/// # Returns
/// - `200 OK` - Booking canceled
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Booking not found for this hotel and user
/// - `409 Conflict` - Booking already canceled
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_id}/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully canceled booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path((hotel_id, booking_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.cancel(hotel_id, booking_id, &user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Confirm a Pending booking as a hotel admin.
///
/// # Access Control
/// - Admins of the hotel; checked before the booking is looked up
///
/// # Returns
/// - `200 OK` - Booking confirmed
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not administer the hotel
/// - `404 Not Found` - Booking not found at this hotel
/// - `409 Conflict` - Booking canceled or already confirmed
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_id}/bookings/{booking_id}/admin/confirm",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully confirmed booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not administer the hotel", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking_as_admin(
    State(state): State<AppState>,
    session: Session,
    Path((hotel_id, booking_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .confirm_by_admin(hotel_id, booking_id, &user.id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel any booking at a hotel as a hotel admin.
///
/// # Access Control
/// - Admins of the hotel; checked before the booking is looked up
///
/// # Returns
/// - `200 OK` - Booking canceled
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not administer the hotel
/// - `404 Not Found` - Booking not found at this hotel
/// - `409 Conflict` - Booking already canceled
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_id}/bookings/{booking_id}/admin/cancel",
    tag = BOOKING_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully canceled booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not administer the hotel", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking_as_admin(
    State(state): State<AppState>,
    session: Session,
    Path((hotel_id, booking_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .cancel_by_admin(hotel_id, booking_id, &user.id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
