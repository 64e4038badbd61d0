//! User domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::auth::UserDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Administrator,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Administrator => "Administrator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Self::User),
            "Administrator" => Ok(Self::Administrator),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

/// User domain model. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<UserRole>()
            .map_err(|e| DbErr::Custom(format!("User {} has invalid role: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn is_administrator(&self) -> bool {
        self.role == UserRole::Administrator
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a registered user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}
