use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub rating: f64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub per_night_rate: Decimal,
    pub country_id: i32,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelSlimDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    pub address: String,
    pub rating: f64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub per_night_rate: Decimal,
    pub country_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateHotelDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub rating: f64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub per_night_rate: Decimal,
    pub country_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignHotelAdminDto {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelAdminDto {
    pub hotel_id: i32,
    pub user_id: String,
    pub email: String,
}

/// Query filters for the hotel listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelFilterQuery {
    pub country_id: Option<i32>,
    pub minimum_rating: Option<f64>,
    pub maximum_rating: Option<f64>,
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
    /// Substring of the hotel address
    pub location: Option<String>,
    /// Substring of the hotel name or address
    pub search: Option<String>,
    /// name, rating or address
    pub sort_by: Option<String>,
    pub is_sort_descending: Option<bool>,
}
