use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::UserRole,
    service::auth::{AuthService, RegisterParams},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::create_admin},
};

mod promote_initial_admin;

fn register_params(email: &str, password: &str) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        password: password.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Guest".to_string(),
    }
}
