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
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::HotelId))
                    .col(string(Booking::UserId))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    .col(integer(Booking::Guests))
                    .col(big_integer(Booking::TotalPrice))
                    .col(string_len(Booking::Status, 20))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAtUtc)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Booking::UpdatedAtUtc))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel_id")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_id")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_hotel_id")
                    .table(Booking::Table)
                    .col(Booking::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_check_in_check_out")
                    .table(Booking::Table)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    HotelId,
    UserId,
    CheckIn,
    CheckOut,
    Guests,
    TotalPrice,
    Status,
    CreatedAtUtc,
    UpdatedAtUtc,
}
