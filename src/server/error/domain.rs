//! Domain error codes.
//!
//! Closed set of rule violations a service can report. Each variant has a fixed
//! message, a stable code string clients can match on, and an HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::AppError};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("Student not found")]
    StudentNotFound,
    #[error("Course not found")]
    CourseNotFound,
    #[error("Lesson not found")]
    LessonNotFound,
    #[error("Enrollment not found")]
    EnrollmentNotFound,
    #[error("Review not found")]
    ReviewNotFound,
    #[error("Report not found")]
    ReportNotFound,
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Sub-category not found")]
    SubCategoryNotFound,
    #[error("Payment not found")]
    PaymentNotFound,

    /// Student is already enrolled in the course.
    #[error("Student is already enrolled in this course")]
    EnrollmentExist,
    /// Student has already reviewed the course.
    #[error("Student has already reviewed this course")]
    ReviewExist,
    #[error("Category name already exists")]
    CategoryExist,
    #[error("Sub-category name already exists")]
    SubCategoryExist,
    #[error("Email already exists")]
    EmailExist,

    /// No approved payment of the student covers the course.
    #[error("Course has not been purchased")]
    CourseNotPurchased,
    /// Reviewer has not completed every lesson of the course.
    #[error("Course has not been finished")]
    CourseNotFinished,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,
    #[error("Payment must contain at least one distinct course")]
    InvalidPayment,
    /// Generic failure, also used where "not found" and "not allowed" are deliberately
    /// indistinguishable.
    #[error("Unknown error")]
    UnknownError,
}

impl DomainError {
    /// Stable machine-readable code of the error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::LessonNotFound => "LESSON_NOT_FOUND",
            Self::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::ReportNotFound => "REPORT_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::SubCategoryNotFound => "SUB_CATEGORY_NOT_FOUND",
            Self::PaymentNotFound => "PAYMENT_NOT_FOUND",
            Self::EnrollmentExist => "ENROLLMENT_EXIST",
            Self::ReviewExist => "REVIEW_EXIST",
            Self::CategoryExist => "CATEGORY_EXIST",
            Self::SubCategoryExist => "SUB_CATEGORY_EXIST",
            Self::EmailExist => "EMAIL_EXIST",
            Self::CourseNotPurchased => "COURSE_NOT_PURCHASED",
            Self::CourseNotFinished => "COURSE_NOT_FINISHED",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidPayment => "INVALID_PAYMENT",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::StudentNotFound
            | Self::CourseNotFound
            | Self::LessonNotFound
            | Self::EnrollmentNotFound
            | Self::ReviewNotFound
            | Self::ReportNotFound
            | Self::CategoryNotFound
            | Self::SubCategoryNotFound
            | Self::PaymentNotFound => StatusCode::NOT_FOUND,
            Self::EnrollmentExist
            | Self::ReviewExist
            | Self::CategoryExist
            | Self::SubCategoryExist
            | Self::EmailExist => StatusCode::CONFLICT,
            Self::CourseNotPurchased | Self::CourseNotFinished => StatusCode::FORBIDDEN,
            Self::InvalidRating | Self::InvalidPayment | Self::UnknownError => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
                code: Some(self.code().to_string()),
            }),
        )
            .into_response()
    }
}

/// Returns true when the database rejected a write because of a unique constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Re-labels a unique constraint violation as `error`, passing other failures through.
pub fn on_unique_violation(err: DbErr, error: DomainError) -> AppError {
    if is_unique_violation(&err) {
        error.into()
    } else {
        err.into()
    }
}
