use crate::server::{
    error::{domain::DomainError, AppError},
    service::payment::PaymentService,
};
use entity::payment::PaymentStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_status;
