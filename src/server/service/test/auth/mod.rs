use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        error::{auth::AuthError, AppError},
        service::auth::AuthService,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::builder::TestBuilder;
