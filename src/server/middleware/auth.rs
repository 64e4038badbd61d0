//! Authentication guard for controllers.
//!
//! Resolves the logged-in user from the session and checks role based permissions
//! before a handler calls into the service layer.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::authorization::AuthorizationService,
};

pub enum Permission {
    /// System administrator role.
    Administrator,
    /// Administrator of the given hotel, or a system administrator.
    HotelOrSystemAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Administrator => {
                    if !user.is_administrator() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User lacks the administrator role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::HotelOrSystemAdmin(hotel_id) => {
                    if user.is_administrator() {
                        continue;
                    }

                    let is_hotel_admin = AuthorizationService::new(self.db)
                        .is_hotel_admin(*hotel_id, &user_id)
                        .await?;

                    if !is_hotel_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not an admin of hotel {}", hotel_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
