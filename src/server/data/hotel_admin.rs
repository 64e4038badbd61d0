//! Hotel admin assignments backing the authorization gate.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::HotelAdmin;

use entity::hotel_admin::Column;

pub struct HotelAdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelAdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the user is assigned as an administrator of the hotel.
    pub async fn is_hotel_admin(&self, hotel_id: i32, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::HotelAdmin::find()
            .filter(Column::HotelId.eq(hotel_id))
            .filter(Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, hotel_id: i32, user_id: &str) -> Result<(), DbErr> {
        entity::hotel_admin::ActiveModel {
            hotel_id: ActiveValue::Set(hotel_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets all administrators of a hotel with their emails, ordered by email.
    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<HotelAdmin>, DbErr> {
        let admins = entity::prelude::HotelAdmin::find()
            .filter(Column::HotelId.eq(hotel_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        Ok(admins
            .into_iter()
            .map(|(admin, user)| HotelAdmin {
                hotel_id: admin.hotel_id,
                user_id: admin.user_id,
                email: user.map(|u| u.email).unwrap_or_default(),
            })
            .collect())
    }
}
