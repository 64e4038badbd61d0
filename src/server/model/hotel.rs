//! Hotel domain models and parameters.

use rust_decimal::Decimal;

use crate::{
    model::hotel::{CreateHotelDto, HotelAdminDto, HotelDto, HotelFilterQuery, HotelSlimDto, UpdateHotelDto},
    server::{
        error::AppError,
        util::money::{from_minor_units, to_minor_units},
    },
};

/// Hotel domain model including the name of its country.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub per_night_rate: Decimal,
    pub country_id: i32,
    pub country_name: String,
}

impl Hotel {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The hotel entity from the database
    /// - `country` - The hotel's country, if loaded alongside
    pub fn from_entity(entity: entity::hotel::Model, country: Option<entity::country::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            rating: entity.rating,
            per_night_rate: from_minor_units(entity.per_night_rate),
            country_id: entity.country_id,
            country_name: country.map(|c| c.name).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            address: self.address,
            rating: self.rating,
            per_night_rate: self.per_night_rate,
            country_id: self.country_id,
            country: self.country_name,
        }
    }

    pub fn into_slim_dto(self) -> HotelSlimDto {
        HotelSlimDto {
            id: self.id,
            name: self.name,
            address: self.address,
            rating: self.rating,
        }
    }
}

/// Parameters for creating a hotel.
#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub per_night_rate: Decimal,
    pub country_id: i32,
}

impl From<CreateHotelDto> for CreateHotelParams {
    fn from(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            rating: dto.rating,
            per_night_rate: dto.per_night_rate,
            country_id: dto.country_id,
        }
    }
}

/// Parameters for replacing a hotel's fields.
#[derive(Debug, Clone)]
pub struct UpdateHotelParams {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub per_night_rate: Decimal,
    pub country_id: i32,
}

impl From<UpdateHotelDto> for UpdateHotelParams {
    fn from(dto: UpdateHotelDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            rating: dto.rating,
            per_night_rate: dto.per_night_rate,
            country_id: dto.country_id,
        }
    }
}

/// Column a hotel listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelSortField {
    Name,
    Rating,
    Address,
}

impl HotelSortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "rating" => Some(Self::Rating),
            "address" => Some(Self::Address),
            _ => None,
        }
    }
}

/// Filters and ordering for hotel listings. Defaults to name ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilter {
    pub country_id: Option<i32>,
    pub minimum_rating: Option<f64>,
    pub maximum_rating: Option<f64>,
    /// Lower bound on the nightly rate, in minor units.
    pub min_price: Option<i64>,
    /// Upper bound on the nightly rate, in minor units.
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub search: Option<String>,
    pub sort: Option<(HotelSortField, bool)>,
}

impl HotelFilter {
    /// Builds a filter from query parameters.
    ///
    /// # Returns
    /// - `Ok(HotelFilter)` - Parsed filter
    /// - `Err(AppError::Validation)` - Price bound out of range
    pub fn from_query(query: HotelFilterQuery) -> Result<Self, AppError> {
        let sort = query
            .sort_by
            .as_deref()
            .and_then(HotelSortField::parse)
            .map(|field| (field, query.is_sort_descending.unwrap_or(true)));

        Ok(Self {
            country_id: query.country_id,
            minimum_rating: query.minimum_rating,
            maximum_rating: query.maximum_rating,
            min_price: query.min_price.map(to_minor_units).transpose()?,
            max_price: query.max_price.map(to_minor_units).transpose()?,
            location: non_blank(query.location),
            search: non_blank(query.search),
            sort,
        })
    }
}

/// Trims a free-text filter, dropping it when nothing is left.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A user assigned as administrator of a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelAdmin {
    pub hotel_id: i32,
    pub user_id: String,
    pub email: String,
}

impl HotelAdmin {
    pub fn into_dto(self) -> HotelAdminDto {
        HotelAdminDto {
            hotel_id: self.hotel_id,
            user_id: self.user_id,
            email: self.email,
        }
    }
}
