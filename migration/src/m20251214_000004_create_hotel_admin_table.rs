use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251213_000001_create_user_table::User, m20251213_000003_create_hotel_table::Hotel};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelAdmin::Table)
                    .if_not_exists()
                    .col(pk_auto(HotelAdmin::Id))
                    .col(string(HotelAdmin::UserId))
                    .col(integer(HotelAdmin::HotelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_admin_user_id")
                            .from(HotelAdmin::Table, HotelAdmin::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_admin_hotel_id")
                            .from(HotelAdmin::Table, HotelAdmin::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_admin_hotel_user")
                    .table(HotelAdmin::Table)
                    .col(HotelAdmin::HotelId)
                    .col(HotelAdmin::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelAdmin {
    Table,
    Id,
    UserId,
    HotelId,
}
