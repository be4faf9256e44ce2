//! Lesson completion factory for recording progress in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that the enrollment has completed the lesson.
///
/// # Arguments
/// - `db` - Database connection
/// - `enrollment_id` - Enrollment making progress
/// - `lesson_id` - Lesson that was completed
///
/// # Returns
/// - `Ok(entity::lesson_completion::Model)` - Created completion row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_lesson_completion(
    db: &DatabaseConnection,
    enrollment_id: i32,
    lesson_id: i32,
) -> Result<entity::lesson_completion::Model, DbErr> {
    entity::lesson_completion::ActiveModel {
        enrollment_id: ActiveValue::Set(enrollment_id),
        lesson_id: ActiveValue::Set(lesson_id),
        completed_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
