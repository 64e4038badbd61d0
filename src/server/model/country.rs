//! Country domain models and parameters.

use crate::{
    model::country::{
        CountryDto, CountryHotelsQuery, CountryWithHotelsDto, CreateCountryDto, PatchCountryDto,
        UpdateCountryDto,
    },
    server::model::hotel::{non_blank, Hotel, HotelSortField},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

impl Country {
    pub fn from_entity(entity: entity::country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_name: entity.short_name,
        }
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
        }
    }
}

/// Country together with all of its hotels.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryWithHotels {
    pub country: Country,
    pub hotels: Vec<Hotel>,
}

impl CountryWithHotels {
    pub fn into_dto(self) -> CountryWithHotelsDto {
        CountryWithHotelsDto {
            id: self.country.id,
            name: self.country.name,
            short_name: self.country.short_name,
            hotels: self.hotels.into_iter().map(Hotel::into_slim_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCountryParams {
    pub name: String,
    pub short_name: String,
}

impl From<CreateCountryDto> for CreateCountryParams {
    fn from(dto: CreateCountryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            short_name: dto.short_name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCountryParams {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

impl From<UpdateCountryDto> for UpdateCountryParams {
    fn from(dto: UpdateCountryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.trim().to_string(),
            short_name: dto.short_name.trim().to_string(),
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct PatchCountryParams {
    pub name: Option<String>,
    pub short_name: Option<String>,
}

impl From<PatchCountryDto> for PatchCountryParams {
    fn from(dto: PatchCountryDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            short_name: dto.short_name.map(|s| s.trim().to_string()),
        }
    }
}

/// Filters for the hotels of one country. Defaults to name ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryHotelsFilter {
    pub search: Option<String>,
    pub sort: Option<(HotelSortField, bool)>,
}

impl From<CountryHotelsQuery> for CountryHotelsFilter {
    fn from(query: CountryHotelsQuery) -> Self {
        let sort = query
            .sort_by
            .as_deref()
            .and_then(HotelSortField::parse)
            .filter(|field| *field != HotelSortField::Address)
            .map(|field| (field, query.is_sort_descending.unwrap_or(true)));

        Self {
            search: non_blank(query.search),
            sort,
        }
    }
}
