//! Enrollment factory for creating test enrollment entities.

use chrono::Utc;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments linking a student to a course.
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    course_id: i32,
    status: EnrollmentStatus,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory with status ENROLLED.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, course_id: i32) -> Self {
        Self {
            db,
            student_id,
            course_id,
            status: EnrollmentStatus::Enrolled,
        }
    }

    /// Sets the enrollment status.
    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            course_id: ActiveValue::Set(self.course_id),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set(format!(
                "Student {} enrolled in course {}",
                self.student_id, self.course_id
            )),
            enrolled_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ENROLLED enrollment for the student in the course.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, student_id, course_id).build().await
}
