//! Email and password authentication.
//!
//! Registers users with Argon2 password hashes, verifies login credentials and promotes
//! the configured bootstrap administrator at startup. Session handling stays in the
//! controller; this service only deals with users.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User, UserRole},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration input before normalization.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with the `User` role.
    ///
    /// # Returns
    /// - `Ok(User)` - Registered user
    /// - `Err(AppError::Validation)` - Malformed email, short password or blank name
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let email = normalize_email(&params.email);
        let first_name = params.first_name.trim().to_string();
        let last_name = params.last_name.trim().to_string();

        if !is_valid_email(&email) {
            return Err(AppError::Validation("Email address is not valid".to_string()));
        }
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::Validation(
                "First and last name are required".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        let user = repo
            .create(CreateUserParams {
                email,
                password_hash,
                first_name,
                last_name,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user)
    }

    /// Verifies credentials.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Otherwise
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some((user, hash)) = UserRepository::new(self.db)
            .find_with_password_hash(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }

    /// Promotes the user registered under `admin_email` when no Administrator exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User was promoted
    /// - `Ok(None)` - An administrator already exists, or no matching user
    pub async fn promote_initial_admin(
        &self,
        admin_email: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        let Some(email) = admin_email.map(normalize_email) else {
            tracing::warn!("No administrator exists and ADMIN_EMAIL is not set");
            return Ok(None);
        };

        let Some(user) = repo.find_by_email(&email).await? else {
            tracing::warn!(
                "No administrator exists and no user is registered as {}",
                email
            );
            return Ok(None);
        };

        let user = repo.set_role(&user.id, UserRole::Administrator).await?;

        tracing::info!(user_id = %user.id, "Promoted {} to administrator", email);

        Ok(Some(user))
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
