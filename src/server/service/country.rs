//! Country catalogue.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{country::CountryRepository, hotel::HotelRepository},
    error::AppError,
    model::{
        country::{
            Country, CountryHotelsFilter, CountryWithHotels, CreateCountryParams,
            PatchCountryParams, UpdateCountryParams,
        },
        hotel::Hotel,
        pagination::{PageRequest, Paged},
    },
};

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all countries, optionally filtered by a search over name and short name.
    pub async fn get_all(&self, search: Option<String>) -> Result<Vec<Country>, AppError> {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(CountryRepository::new(self.db)
            .get_all(search.as_deref())
            .await?)
    }

    /// Gets a country with the slim list of its hotels.
    ///
    /// # Returns
    /// - `Ok(CountryWithHotels)` - Country and its hotels ordered by name
    /// - `Err(AppError::NotFound)` - No country with that ID
    pub async fn get_with_hotels(&self, id: i32) -> Result<CountryWithHotels, AppError> {
        let country = CountryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| country_not_found(id))?;

        let hotels = HotelRepository::new(self.db).get_by_country(id).await?;

        Ok(CountryWithHotels { country, hotels })
    }

    /// Gets a page of a country's hotels.
    pub async fn get_hotels(
        &self,
        id: i32,
        filter: CountryHotelsFilter,
        page: PageRequest,
    ) -> Result<Paged<Hotel>, AppError> {
        if !CountryRepository::new(self.db).exists(id).await? {
            return Err(country_not_found(id));
        }

        let (hotels, total) = HotelRepository::new(self.db)
            .get_paginated_by_country(id, &filter, page)
            .await?;

        Ok(Paged::new(hotels, total, page))
    }

    /// Creates a country.
    ///
    /// # Returns
    /// - `Ok(Country)` - Created country
    /// - `Err(AppError::Validation)` - Blank name or short name
    /// - `Err(AppError::Conflict)` - Name already used, ignoring case
    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, AppError> {
        validate_names(Some(&params.name), Some(&params.short_name))?;

        let txn = self.db.begin().await?;
        let repo = CountryRepository::new(&txn);

        if repo.name_exists(&params.name, None).await? {
            return Err(duplicate_name(&params.name));
        }

        let country = repo.create(params).await?;

        txn.commit().await?;

        tracing::info!(country_id = country.id, name = %country.name, "Created country");

        Ok(country)
    }

    /// Replaces the name and short name of a country.
    ///
    /// # Returns
    /// - `Ok(Country)` - Updated country
    /// - `Err(AppError::Validation)` - Route ID differs from body ID, or blank fields
    /// - `Err(AppError::NotFound)` - No country with that ID
    /// - `Err(AppError::Conflict)` - Another country has the name
    pub async fn update(&self, id: i32, params: UpdateCountryParams) -> Result<Country, AppError> {
        if id != params.id {
            return Err(AppError::Validation(
                "Route ID does not match the country ID in the body".to_string(),
            ));
        }

        self.write(id, Some(params.name), Some(params.short_name))
            .await
    }

    /// Changes only the fields present in `params`.
    pub async fn patch(&self, id: i32, params: PatchCountryParams) -> Result<Country, AppError> {
        self.write(id, params.name, params.short_name).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CountryRepository::new(self.db).delete(id).await? {
            return Err(country_not_found(id));
        }

        tracing::info!(country_id = id, "Deleted country");

        Ok(())
    }

    async fn write(
        &self,
        id: i32,
        name: Option<String>,
        short_name: Option<String>,
    ) -> Result<Country, AppError> {
        validate_names(name.as_deref(), short_name.as_deref())?;

        let txn = self.db.begin().await?;
        let repo = CountryRepository::new(&txn);

        let Some(current) = repo.get_by_id(id).await? else {
            return Err(country_not_found(id));
        };

        if name.is_none() && short_name.is_none() {
            return Ok(current);
        }

        if let Some(name) = &name {
            if repo.name_exists(name, Some(id)).await? {
                return Err(duplicate_name(name));
            }
        }

        let country = repo.update(id, name, short_name).await?;

        txn.commit().await?;

        tracing::info!(country_id = id, "Updated country");

        Ok(country)
    }
}

/// Rejects present but blank fields. Absent fields are left to the caller.
fn validate_names(name: Option<&str>, short_name: Option<&str>) -> Result<(), AppError> {
    if name.is_some_and(str::is_empty) {
        return Err(AppError::Validation("Country name is required".to_string()));
    }
    if short_name.is_some_and(str::is_empty) {
        return Err(AppError::Validation(
            "Country short name is required".to_string(),
        ));
    }

    Ok(())
}

fn country_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Country '{}' was not found", id))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("A country named '{}' already exists", name))
}
