use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub category_id: i32,
    pub sub_category_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub category_id: i32,
    #[serde(default)]
    pub sub_category_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    pub category_id: i32,
    #[serde(default)]
    pub sub_category_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Average review rating of a course, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseRatingDto {
    pub course_id: i32,
    pub average_rating: f64,
    pub review_count: u64,
}

/// Percentage of a course's enrollments that completed every lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompletionRateDto {
    pub course_id: i32,
    pub completion_rate: f64,
}
