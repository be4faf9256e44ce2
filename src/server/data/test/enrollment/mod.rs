use crate::server::{data::enrollment::EnrollmentRepository, error::domain::is_unique_violation};
use entity::enrollment::EnrollmentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
