use sea_orm_migration::{prelude::*, schema::*};

use super::m20251213_000002_create_country_table::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string(Hotel::Name))
                    .col(string(Hotel::Address))
                    .col(double(Hotel::Rating))
                    .col(big_integer(Hotel::PerNightRate))
                    .col(integer(Hotel::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_country_id")
                            .from(Hotel::Table, Hotel::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Address,
    Rating,
    PerNightRate,
    CountryId,
}
