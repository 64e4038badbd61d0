use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The request did not come from a logged-in client. Results in 401 Unauthorized.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized, the client must log in again.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(String),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Login attempted with an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session or invalid credentials
/// - 403 Forbidden - Logged in without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
