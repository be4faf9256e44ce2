use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatusDto {
    Enrolled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub status: EnrollmentStatusDto,
    pub description: String,
    pub enrolled_at: DateTime<Utc>,
}

/// Lesson progress of one enrollment.
///
/// `progress` is `completed_lessons / total_lessons` and is not capped at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressDto {
    pub enrollment_id: i32,
    pub course_id: i32,
    pub completed_lessons: u64,
    pub total_lessons: u64,
    pub progress: f64,
}
