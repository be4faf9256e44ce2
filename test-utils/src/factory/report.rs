//! Report factory for creating test report entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a report by the student about the course.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Reported course
/// - `student_id` - Reporting student
///
/// # Returns
/// - `Ok(entity::report::Model)` - Created report
/// - `Err(DbErr)` - Database error during insert
pub async fn create_report(
    db: &DatabaseConnection,
    course_id: i32,
    student_id: i32,
) -> Result<entity::report::Model, DbErr> {
    entity::report::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        student_id: ActiveValue::Set(student_id),
        content: ActiveValue::Set("Video in lesson 2 does not play".to_string()),
        sent_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
