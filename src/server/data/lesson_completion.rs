use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Records which lessons an enrollment has completed.
pub struct LessonCompletionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonCompletionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a lesson completed for an enrollment.
    ///
    /// Returns false without writing when the lesson was already completed.
    pub async fn complete(&self, enrollment_id: i32, lesson_id: i32) -> Result<bool, DbErr> {
        if self.is_completed(enrollment_id, lesson_id).await? {
            return Ok(false);
        }

        entity::lesson_completion::ActiveModel {
            enrollment_id: ActiveValue::Set(enrollment_id),
            lesson_id: ActiveValue::Set(lesson_id),
            completed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn is_completed(&self, enrollment_id: i32, lesson_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::LessonCompletion::find()
            .filter(entity::lesson_completion::Column::EnrollmentId.eq(enrollment_id))
            .filter(entity::lesson_completion::Column::LessonId.eq(lesson_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the lessons completed by an enrollment
    pub async fn count_by_enrollment(&self, enrollment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::LessonCompletion::find()
            .filter(entity::lesson_completion::Column::EnrollmentId.eq(enrollment_id))
            .count(self.db)
            .await
    }
}
