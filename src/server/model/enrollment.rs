//! Enrollment domain models.
//!
//! An enrollment links one student to one course. Its progress is derived from
//! `lesson_completion` rows and is never stored.

use chrono::{DateTime, Utc};
use entity::enrollment::EnrollmentStatus;

use crate::{
    model::enrollment::{EnrollmentDto, EnrollmentStatusDto, ProgressDto},
    server::util::math::progress_ratio,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub status: EnrollmentStatus,
    pub description: String,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            status: entity.status,
            description: entity.description,
            enrolled_at: entity.enrolled_at,
        }
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            status: match self.status {
                EnrollmentStatus::Enrolled => EnrollmentStatusDto::Enrolled,
                EnrollmentStatus::Completed => EnrollmentStatusDto::Completed,
            },
            description: self.description,
            enrolled_at: self.enrolled_at,
        }
    }
}

/// Generated description stored on a new enrollment.
pub fn enrollment_description(student_id: i32, course_id: i32) -> String {
    format!("Student {} enrolled in course {}", student_id, course_id)
}

/// Lesson counts of one enrollment against its course.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub enrollment_id: i32,
    pub course_id: i32,
    pub completed_lessons: u64,
    pub total_lessons: u64,
}

impl Progress {
    /// Completed over total lessons, 0.0 for a course without lessons.
    pub fn ratio(&self) -> f64 {
        progress_ratio(self.completed_lessons, self.total_lessons)
    }

    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            progress: self.ratio(),
            enrollment_id: self.enrollment_id,
            course_id: self.course_id,
            completed_lessons: self.completed_lessons,
            total_lessons: self.total_lessons,
        }
    }
}
