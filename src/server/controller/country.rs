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
        country::{
            CountryDto, CountryFilterQuery, CountryHotelsQuery, CountryWithHotelsDto,
            CreateCountryDto, PatchCountryDto, UpdateCountryDto,
        },
        hotel::HotelDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            country::{
                Country, CountryHotelsFilter, CreateCountryParams, PatchCountryParams,
                UpdateCountryParams,
            },
            hotel::Hotel,
            pagination::PageRequest,
        },
        service::country::CountryService,
        state::AppState,
    },
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

/// Get all countries, optionally searched by name or short name.
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    params(CountryFilterQuery),
    responses(
        (status = 200, description = "Successfully retrieved countries", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(
    State(state): State<AppState>,
    Query(filter): Query<CountryFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let countries: Vec<CountryDto> = service
        .get_all(filter.search)
        .await?
        .into_iter()
        .map(Country::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(countries)))
}

/// Get a country with the slim list of its hotels.
#[utoipa::path(
    get,
    path = "/api/countries/{country_id}",
    tag = COUNTRY_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved country", body = CountryWithHotelsDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_by_id(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let country = service.get_with_hotels(country_id).await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Get a page of a country's hotels.
///
/// # Returns
/// - `200 OK` - Paged list of hotels, ordered by name unless `sort_by` is given
/// - `404 Not Found` - Country not found
#[utoipa::path(
    get,
    path = "/api/countries/{country_id}/hotels",
    tag = COUNTRY_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID"),
        PaginationQuery,
        CountryHotelsQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotels", body = PagedResultDto<HotelDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_hotels(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
    Query(filter): Query<CountryHotelsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let hotels = service
        .get_hotels(
            country_id,
            CountryHotelsFilter::from(filter),
            PageRequest::from(pagination),
        )
        .await?;

    Ok((StatusCode::OK, Json(hotels.into_dto(Hotel::into_dto))))
}

/// Create a country.
///
/// # Access Control
/// - `Administrator` - Only system administrators can create countries
///
/// # Returns
/// - `201 Created` - Country created
/// - `400 Bad Request` - Blank name or short name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `409 Conflict` - Name already used
#[utoipa::path(
    post,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Successfully created country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 409, description = "Duplicate country name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = CountryService::new(&state.db);

    let country = service.create(CreateCountryParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(country.into_dto())))
}

/// Replace the name and short name of a country.
///
/// # Access Control
/// - `Administrator` - Only system administrators can update countries
#[utoipa::path(
    put,
    path = "/api/countries/{country_id}",
    tag = COUNTRY_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    request_body = UpdateCountryDto,
    responses(
        (status = 200, description = "Successfully updated country", body = CountryDto),
        (status = 400, description = "Route ID differs from body ID, or invalid data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 409, description = "Duplicate country name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    session: Session,
    Path(country_id): Path<i32>,
    Json(payload): Json<UpdateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = CountryService::new(&state.db);

    let country = service
        .update(country_id, UpdateCountryParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Change only the supplied fields of a country.
///
/// # Access Control
/// - `Administrator` - Only system administrators can update countries
#[utoipa::path(
    patch,
    path = "/api/countries/{country_id}",
    tag = COUNTRY_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    request_body = PatchCountryDto,
    responses(
        (status = 200, description = "Successfully updated country", body = CountryDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 409, description = "Duplicate country name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_country(
    State(state): State<AppState>,
    session: Session,
    Path(country_id): Path<i32>,
    Json(payload): Json<PatchCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = CountryService::new(&state.db);

    let country = service
        .patch(country_id, PatchCountryParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Delete a country and, through the cascade, its hotels.
///
/// # Access Control
/// - `Administrator` - Only system administrators can delete countries
#[utoipa::path(
    delete,
    path = "/api/countries/{country_id}",
    tag = COUNTRY_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted country"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an administrator", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    session: Session,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Administrator])
        .await?;

    let service = CountryService::new(&state.db);

    service.delete(country_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
