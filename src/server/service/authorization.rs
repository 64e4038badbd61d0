//! Capability checks composed by the booking operations.
//!
//! Ownership is enforced by the scoped booking lookup in `BookingRepository::find_for_owner`.
//! Hotel administration is backed by the hotel admin relation and checked here.

use sea_orm::ConnectionTrait;

use crate::server::{data::hotel_admin::HotelAdminRepository, error::AppError};

pub struct AuthorizationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorizationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the user is an administrator of the hotel.
    pub async fn is_hotel_admin(&self, hotel_id: i32, user_id: &str) -> Result<bool, AppError> {
        let repo = HotelAdminRepository::new(self.db);

        Ok(repo.is_hotel_admin(hotel_id, user_id).await?)
    }

    /// Fails with `Forbidden` unless the user administers the hotel.
    pub async fn require_hotel_admin(&self, hotel_id: i32, user_id: &str) -> Result<(), AppError> {
        if self.is_hotel_admin(hotel_id, user_id).await? {
            return Ok(());
        }

        tracing::debug!(hotel_id, user_id, "Hotel admin check failed");

        Err(AppError::Forbidden(
            "You are not an admin of the selected hotel".to_string(),
        ))
    }
}
