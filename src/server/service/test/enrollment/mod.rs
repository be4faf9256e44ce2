use crate::server::{
    error::{domain::DomainError, AppError},
    service::enrollment::EnrollmentService,
};
use entity::{enrollment::EnrollmentStatus, payment::PaymentStatus};
use test_utils::{builder::TestBuilder, factory};

mod complete_lesson;
mod create;
mod progress;
