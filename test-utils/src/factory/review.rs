//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a student's review of a course.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    course_id: i32,
    rating: i32,
    comment: String,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with a rating of 5.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, course_id: i32) -> Self {
        Self {
            db,
            student_id,
            course_id,
            rating: 5,
            comment: "Great course!".to_string(),
        }
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            course_id: ActiveValue::Set(self.course_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default review by the student for the course.
pub async fn create_review(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, student_id, course_id).build().await
}
