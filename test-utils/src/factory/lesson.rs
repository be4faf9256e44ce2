//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons belonging to a course.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    title: String,
    content: String,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            course_id,
            title: format!("Lesson {}", id),
            content: format!("Content of lesson {}", id),
        }
    }

    /// Sets the lesson title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the lesson content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the lesson entity into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values in the given course.
pub async fn create_lesson(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, course_id).build().await
}

/// Creates `count` lessons with default values in the given course.
///
/// # Returns
/// - `Ok(Vec<entity::lesson::Model>)` - Created lessons in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_lessons(
    db: &DatabaseConnection,
    course_id: i32,
    count: usize,
) -> Result<Vec<entity::lesson::Model>, DbErr> {
    let mut lessons = Vec::with_capacity(count);
    for _ in 0..count {
        lessons.push(create_lesson(db, course_id).await?);
    }

    Ok(lessons)
}
