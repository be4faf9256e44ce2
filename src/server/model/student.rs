use chrono::{DateTime, Utc};

use crate::model::student::{CreateStudentDto, StudentDto, UpdateStudentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub full_name: String,
    pub email: String,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            full_name: dto.full_name,
            email: dto.email,
        }
    }
}
