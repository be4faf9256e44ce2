use crate::server::{
    error::{domain::DomainError, AppError},
    model::review::{CreateReviewParams, UpdateReviewParams},
    service::review::ReviewService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn review_params(student_id: i32, course_id: i32, rating: i32) -> CreateReviewParams {
    CreateReviewParams {
        student_id,
        course_id,
        rating,
        comment: "Great course".to_string(),
    }
}
