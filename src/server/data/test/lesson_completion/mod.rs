use crate::server::data::{lesson::LessonRepository, lesson_completion::LessonCompletionRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
