use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Whether a rating lies within `MIN_RATING..=MAX_RATING`.
pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Parameters for a review written by `student_id` on `course_id`.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub student_id: i32,
    pub course_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    pub fn from_dto(student_id: i32, course_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            student_id,
            course_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// Parameters for overwriting a review, issued by `student_id`.
#[derive(Debug, Clone)]
pub struct UpdateReviewParams {
    pub id: i32,
    pub student_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl UpdateReviewParams {
    pub fn from_dto(id: i32, student_id: i32, dto: UpdateReviewDto) -> Self {
        Self {
            id,
            student_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
