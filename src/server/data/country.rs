//! Country data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::country::{Country, CreateCountryParams};

use entity::country::Column;

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all countries ordered by name, optionally filtered by a search term over
    /// name and short name.
    pub async fn get_all(&self, search: Option<&str>) -> Result<Vec<Country>, DbErr> {
        let mut query = entity::prelude::Country::find();

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::ShortName.contains(search)),
            );
        }

        let countries = query.order_by_asc(Column::Name).all(self.db).await?;

        Ok(countries.into_iter().map(Country::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Country>, DbErr> {
        let country = entity::prelude::Country::find_by_id(id).one(self.db).await?;

        Ok(country.map(Country::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Country::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether a country other than `exclude_id` already uses the name.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Country::find()
            .select_only()
            .column(Column::Name);

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        let names: Vec<String> = query.into_tuple().all(self.db).await?;
        let name = name.trim();

        Ok(names
            .iter()
            .any(|existing| existing.trim().eq_ignore_ascii_case(name)))
    }

    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, DbErr> {
        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            short_name: ActiveValue::Set(params.short_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Country::from_entity(country))
    }

    /// Writes the given fields; `None` leaves a column untouched.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        short_name: Option<String>,
    ) -> Result<Country, DbErr> {
        let country = entity::country::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            short_name: short_name.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
        .update(self.db)
        .await?;

        Ok(Country::from_entity(country))
    }

    /// Deletes a country and, through the cascade, its hotels.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Country::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
