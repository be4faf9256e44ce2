use crate::server::{
    error::{domain::DomainError, AppError},
    model::lesson::{CreateLessonParams, UpdateLessonParams},
    service::lesson::LessonService,
    util::pagination::PageRequest,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
