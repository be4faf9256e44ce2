use crate::server::{
    data::review::ReviewRepository, error::domain::is_unique_violation,
    model::review::CreateReviewParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
