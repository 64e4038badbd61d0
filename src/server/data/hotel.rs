//! Hotel data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    country::CountryHotelsFilter,
    hotel::{CreateHotelParams, Hotel, HotelFilter, HotelSortField, UpdateHotelParams},
    pagination::PageRequest,
};

use entity::hotel::Column;

pub struct HotelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a hotel by ID along with its country name.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let result = entity::prelude::Hotel::find_by_id(id)
            .find_also_related(entity::prelude::Country)
            .one(self.db)
            .await?;

        Ok(result.map(|(hotel, country)| Hotel::from_entity(hotel, country)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hotel::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether another hotel in the country already uses the name.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    ///
    /// # Arguments
    /// - `name` - Candidate hotel name
    /// - `country_id` - Country to search within
    /// - `exclude_id` - Hotel to ignore, used when renaming an existing hotel
    pub async fn name_exists_in_country(
        &self,
        name: &str,
        country_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Hotel::find()
            .select_only()
            .column(Column::Name)
            .filter(Column::CountryId.eq(country_id));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        let names: Vec<String> = query.into_tuple().all(self.db).await?;
        let name = name.trim();

        Ok(names
            .iter()
            .any(|existing| existing.trim().eq_ignore_ascii_case(name)))
    }

    /// Inserts a hotel.
    ///
    /// # Arguments
    /// - `params` - Hotel fields
    /// - `per_night_rate` - Nightly rate in minor units
    pub async fn create(&self, params: CreateHotelParams, per_night_rate: i64) -> Result<Hotel, DbErr> {
        let hotel = entity::hotel::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            rating: ActiveValue::Set(params.rating),
            per_night_rate: ActiveValue::Set(per_night_rate),
            country_id: ActiveValue::Set(params.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(hotel.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Hotel with id {} not found after creation",
            hotel.id
        )))
    }

    /// Replaces all fields of an existing hotel.
    pub async fn update(&self, params: UpdateHotelParams, per_night_rate: i64) -> Result<Hotel, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            rating: ActiveValue::Set(params.rating),
            per_night_rate: ActiveValue::Set(per_night_rate),
            country_id: ActiveValue::Set(params.country_id),
        }
        .update(self.db)
        .await?;

        self.get_by_id(params.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Hotel with id {} not found after update",
            params.id
        )))
    }

    /// Deletes a hotel. Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Hotel::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a filtered page of hotels across all countries.
    ///
    /// # Returns
    /// - `Ok((hotels, total))` - Hotels on the page and total matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &HotelFilter,
        page: PageRequest,
    ) -> Result<(Vec<Hotel>, u64), DbErr> {
        let mut query = entity::prelude::Hotel::find();

        if let Some(country_id) = filter.country_id {
            query = query.filter(Column::CountryId.eq(country_id));
        }
        if let Some(min) = filter.minimum_rating {
            query = query.filter(Column::Rating.gte(min));
        }
        if let Some(max) = filter.maximum_rating {
            query = query.filter(Column::Rating.lte(max));
        }
        if let Some(min) = filter.min_price {
            query = query.filter(Column::PerNightRate.gte(min));
        }
        if let Some(max) = filter.max_price {
            query = query.filter(Column::PerNightRate.lte(max));
        }
        if let Some(location) = &filter.location {
            query = query.filter(Column::Address.contains(location));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::Address.contains(search)),
            );
        }

        let paginator = apply_sort(query, filter.sort)
            .find_also_related(entity::prelude::Country)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let hotels = paginator
            .fetch_page(page.page_index())
            .await?
            .into_iter()
            .map(|(hotel, country)| Hotel::from_entity(hotel, country))
            .collect();

        Ok((hotels, total))
    }

    /// Gets every hotel of a country ordered by name.
    pub async fn get_by_country(&self, country_id: i32) -> Result<Vec<Hotel>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .filter(Column::CountryId.eq(country_id))
            .order_by_asc(Column::Name)
            .find_also_related(entity::prelude::Country)
            .all(self.db)
            .await?;

        Ok(hotels
            .into_iter()
            .map(|(hotel, country)| Hotel::from_entity(hotel, country))
            .collect())
    }

    /// Gets a page of one country's hotels, optionally searched by name.
    pub async fn get_paginated_by_country(
        &self,
        country_id: i32,
        filter: &CountryHotelsFilter,
        page: PageRequest,
    ) -> Result<(Vec<Hotel>, u64), DbErr> {
        let mut query = entity::prelude::Hotel::find().filter(Column::CountryId.eq(country_id));

        if let Some(search) = &filter.search {
            query = query.filter(Column::Name.contains(search));
        }

        let paginator = apply_sort(query, filter.sort)
            .find_also_related(entity::prelude::Country)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let hotels = paginator
            .fetch_page(page.page_index())
            .await?
            .into_iter()
            .map(|(hotel, country)| Hotel::from_entity(hotel, country))
            .collect();

        Ok((hotels, total))
    }
}

fn apply_sort(
    query: Select<entity::hotel::Entity>,
    sort: Option<(HotelSortField, bool)>,
) -> Select<entity::hotel::Entity> {
    let (column, descending) = match sort {
        Some((HotelSortField::Name, desc)) => (Column::Name, desc),
        Some((HotelSortField::Rating, desc)) => (Column::Rating, desc),
        Some((HotelSortField::Address, desc)) => (Column::Address, desc),
        None => (Column::Name, false),
    };

    let query = if descending {
        query.order_by_desc(column)
    } else {
        query.order_by_asc(column)
    };

    query.order_by_asc(Column::Id)
}
