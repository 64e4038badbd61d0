//! Factory for hotel admin assignments.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a user as an administrator of a hotel.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user to assign
/// - `hotel_id` - ID of the hotel
///
/// # Returns
/// - `Ok(entity::hotel_admin::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hotel_admin(
    db: &DatabaseConnection,
    user_id: &str,
    hotel_id: i32,
) -> Result<entity::hotel_admin::Model, DbErr> {
    entity::hotel_admin::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.to_string()),
        hotel_id: ActiveValue::Set(hotel_id),
    }
    .insert(db)
    .await
}
