use chrono::{DateTime, Utc};

use crate::model::lesson::{CreateLessonDto, LessonDto, UpdateLessonDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub course_id: i32,
    pub title: String,
    pub content: String,
}

impl CreateLessonParams {
    pub fn from_dto(dto: CreateLessonDto) -> Self {
        Self {
            course_id: dto.course_id,
            title: dto.title,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLessonParams {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl UpdateLessonParams {
    pub fn from_dto(id: i32, dto: UpdateLessonDto) -> Self {
        Self {
            id,
            title: dto.title,
            content: dto.content,
        }
    }
}
