//! Country factory for creating test country entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test countries with customizable fields.
pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    short_name: String,
}

impl<'a> CountryFactory<'a> {
    /// Creates a new CountryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Country {id}"`
    /// - short_name: `"C{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Country {}", id),
            short_name: format!("C{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Builds and inserts the country entity into the database.
    pub async fn build(self) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            short_name: ActiveValue::Set(self.short_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a country with default values.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).build().await
}
