use crate::server::{
    error::{domain::DomainError, AppError},
    model::report::ReportFields,
    service::report::ReportService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn report_fields(course_id: i32, student_id: i32) -> ReportFields {
    ReportFields {
        course_id,
        student_id,
        content: "Lesson 3 links to a dead page".to_string(),
    }
}
