use crate::server::{
    error::{domain::DomainError, AppError},
    model::course::{CourseFields, CreateCourseParams},
    service::course::CourseService,
};
use test_utils::{builder::TestBuilder, factory};

mod statistics;
