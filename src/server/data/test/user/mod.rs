use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UserRole},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod find_with_password_hash;
