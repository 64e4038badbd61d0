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
        hotel::{
            AssignHotelAdminDto, CreateHotelDto, HotelAdminDto, HotelDto, HotelFilterQuery,
            UpdateHotelDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            hotel::{CreateHotelParams, Hotel, HotelAdmin, HotelFilter, UpdateHotelParams},
            pagination::PageRequest,
        },
        service::hotel::HotelService,
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// Get a filtered page of hotels.
///
/// # Returns
/// - `200 OK` - Paged list of hotels, ordered by name unless `sort_by` is given
/// - `400 Bad Request` - Price bound out of range
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    params(PaginationQuery, HotelFilterQuery),
    responses(
        (status = 200, description = "Successfully retrieved hotels", body = PagedResultDto<HotelDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
    Query(filter): Query<HotelFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotels = service
        .get_paginated(HotelFilter::from_query(filter)?, PageRequest::from(pagination))
        .await?;

    Ok((StatusCode::OK, Json(hotels.into_dto(Hotel::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_id}",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotel = service.get_by_id(hotel_id).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// Create a hotel.
///
/// # Access Control
/// - `Administrator` - Only system administrators can create hotels
///
/// # Returns
/// - `201 Created` - Hotel created
/// - `400 Bad Request` - Invalid hotel data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `404 Not Found` - Country not found
/// - `409 Conflict` - Country already has a hotel with that name
#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Successfully created hotel", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 409, description = "Duplicate hotel name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = HotelService::new(&state.db);

    let hotel = service.create(CreateHotelParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(hotel.into_dto())))
}

/// Replace every field of a hotel.
///
/// # Access Control
/// - `Administrator` - Only system administrators can update hotels
///
/// # Returns
/// - `200 OK` - Hotel updated
/// - `400 Bad Request` - Route ID differs from body ID, or invalid hotel data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `404 Not Found` - Hotel or country not found
/// - `409 Conflict` - Country already has another hotel with that name
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_id}",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    request_body = UpdateHotelDto,
    responses(
        (status = 200, description = "Successfully updated hotel", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Hotel or country not found", body = ErrorDto),
        (status = 409, description = "Duplicate hotel name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = HotelService::new(&state.db);

    let hotel = service
        .update(hotel_id, UpdateHotelParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// Delete a hotel along with its bookings and admin assignments.
///
/// # Access Control
/// - `Administrator` - Only system administrators can delete hotels
#[utoipa::path(
    delete,
    path = "/api/hotels/{hotel_id}",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted hotel"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = HotelService::new(&state.db);

    service.delete(hotel_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a registered user as administrator of a hotel.
///
/// # Access Control
/// - `Administrator` - Only system administrators can assign hotel admins
///
/// # Returns
/// - `201 Created` - Assignment created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `404 Not Found` - Hotel or user not found
/// - `409 Conflict` - User already administers the hotel
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_id}/admins",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    request_body = AssignHotelAdminDto,
    responses(
        (status = 201, description = "Successfully assigned hotel admin", body = HotelAdminDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Hotel or user not found", body = ErrorDto),
        (status = 409, description = "User already administers the hotel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_hotel_admin(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
    Json(payload): Json<AssignHotelAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = HotelService::new(&state.db);

    let admin = service.assign_admin(hotel_id, &payload.email).await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_id}/admins",
    tag = HOTEL_TAG,
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotel admins", body = Vec<HotelAdminDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_admins(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = HotelService::new(&state.db);

    let admins: Vec<HotelAdminDto> = service
        .get_admins(hotel_id)
        .await?
        .into_iter()
        .map(HotelAdmin::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(admins)))
}
