use chrono::{DateTime, Utc};

use crate::model::course::{
    CompletionRateDto, CourseDto, CourseRatingDto, CreateCourseDto, UpdateCourseDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub category_id: i32,
    pub sub_category_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            sub_category_id: entity.sub_category_id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            category_id: self.category_id,
            sub_category_id: self.sub_category_id,
            title: self.title,
            description: self.description,
            price: self.price,
            created_at: self.created_at,
        }
    }
}

/// Course fields shared by create and update.
#[derive(Debug, Clone)]
pub struct CourseFields {
    pub category_id: i32,
    pub sub_category_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub fields: CourseFields,
}

impl CreateCourseParams {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            fields: CourseFields {
                category_id: dto.category_id,
                sub_category_id: dto.sub_category_id,
                title: dto.title,
                description: dto.description,
                price: dto.price,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub fields: CourseFields,
}

impl UpdateCourseParams {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            fields: CourseFields {
                category_id: dto.category_id,
                sub_category_id: dto.sub_category_id,
                title: dto.title,
                description: dto.description,
                price: dto.price,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRating {
    pub course_id: i32,
    pub average_rating: f64,
    pub review_count: u64,
}

impl CourseRating {
    pub fn into_dto(self) -> CourseRatingDto {
        CourseRatingDto {
            course_id: self.course_id,
            average_rating: self.average_rating,
            review_count: self.review_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRate {
    pub course_id: i32,
    pub completion_rate: f64,
}

impl CompletionRate {
    pub fn into_dto(self) -> CompletionRateDto {
        CompletionRateDto {
            course_id: self.course_id,
            completion_rate: self.completion_rate,
        }
    }
}
