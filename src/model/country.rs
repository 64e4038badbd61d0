use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::hotel::HotelSlimDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryWithHotelsDto {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub hotels: Vec<HotelSlimDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCountryDto {
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCountryDto {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchCountryDto {
    pub name: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryFilterQuery {
    /// Substring of the country name or short name
    pub search: Option<String>,
}

/// Query filters for the hotels of one country.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryHotelsQuery {
    /// Substring of the hotel name
    pub search: Option<String>,
    /// name or rating
    pub sort_by: Option<String>,
    pub is_sort_descending: Option<bool>,
}
