use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        booking::{self, BOOKING_TAG},
        country::{self, COUNTRY_TAG},
        hotel::{self, HOTEL_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Listing API", description = "Hotels, countries and bookings"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        booking::get_user_bookings,
        booking::get_hotel_bookings,
        booking::create_booking,
        booking::update_booking,
        booking::cancel_booking,
        booking::confirm_booking_as_admin,
        booking::cancel_booking_as_admin,
        hotel::get_hotels,
        hotel::get_hotel_by_id,
        hotel::create_hotel,
        hotel::update_hotel,
        hotel::delete_hotel,
        hotel::assign_hotel_admin,
        hotel::get_hotel_admins,
        country::get_countries,
        country::get_country_by_id,
        country::get_country_hotels,
        country::create_country,
        country::update_country,
        country::patch_country,
        country::delete_country,
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session"),
        (name = BOOKING_TAG, description = "Booking lifecycle"),
        (name = HOTEL_TAG, description = "Hotels and hotel admins"),
        (name = COUNTRY_TAG, description = "Countries"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_user));

    let booking_routes = Router::new()
        .route(
            "/api/hotels/{hotel_id}/bookings",
            get(booking::get_user_bookings).post(booking::create_booking),
        )
        .route(
            "/api/hotels/{hotel_id}/bookings/admin",
            get(booking::get_hotel_bookings),
        )
        .route(
            "/api/hotels/{hotel_id}/bookings/{booking_id}",
            put(booking::update_booking),
        )
        .route(
            "/api/hotels/{hotel_id}/bookings/{booking_id}/cancel",
            put(booking::cancel_booking),
        )
        .route(
            "/api/hotels/{hotel_id}/bookings/{booking_id}/admin/confirm",
            put(booking::confirm_booking_as_admin),
        )
        .route(
            "/api/hotels/{hotel_id}/bookings/{booking_id}/admin/cancel",
            put(booking::cancel_booking_as_admin),
        );

    let hotel_routes = Router::new()
        .route("/api/hotels", get(hotel::get_hotels).post(hotel::create_hotel))
        .route(
            "/api/hotels/{hotel_id}",
            get(hotel::get_hotel_by_id)
                .put(hotel::update_hotel)
                .delete(hotel::delete_hotel),
        )
        .route(
            "/api/hotels/{hotel_id}/admins",
            get(hotel::get_hotel_admins).post(hotel::assign_hotel_admin),
        );

    let country_routes = Router::new()
        .route(
            "/api/countries",
            get(country::get_countries).post(country::create_country),
        )
        .route(
            "/api/countries/{country_id}",
            get(country::get_country_by_id)
                .put(country::update_country)
                .patch(country::patch_country)
                .delete(country::delete_country),
        )
        .route(
            "/api/countries/{country_id}/hotels",
            get(country::get_country_hotels),
        );

    Router::new()
        .merge(auth_routes)
        .merge(booking_routes)
        .merge(hotel_routes)
        .merge(country_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
