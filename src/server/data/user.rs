//! User data repository for database operations.
//!
//! Handles registration inserts, lookups by ID and email, and role management with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User, UserRole};

use entity::user::Column;

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with the `User` role and a fresh UUID.
    ///
    /// # Arguments
    /// - `params` - Normalized email, password hash and names
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            role: ActiveValue::Set(UserRole::User.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        User::from_entity(user)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        user.map(User::from_entity).transpose()
    }

    /// Finds a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_with_password_hash(email)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by normalized email together with the stored password hash.
    ///
    /// Only the login flow should need the hash.
    pub async fn find_with_password_hash(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?;

        user.map(|entity| {
            let hash = entity.password_hash.clone();
            User::from_entity(entity).map(|user| (user, hash))
        })
        .transpose()
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether at least one Administrator exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(Column::Role.eq(UserRole::Administrator.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the role of a user.
    pub async fn set_role(&self, user_id: &str, role: UserRole) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id.to_string()),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        User::from_entity(user)
    }
}
