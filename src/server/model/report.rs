use chrono::{DateTime, Utc};

use crate::model::report::{CreateReportDto, ReportDto, UpdateReportDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Report {
    pub fn from_entity(entity: entity::report::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            student_id: entity.student_id,
            content: entity.content,
            sent_at: entity.sent_at,
        }
    }

    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            id: self.id,
            course_id: self.course_id,
            student_id: self.student_id,
            content: self.content,
            sent_at: self.sent_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportFields {
    pub course_id: i32,
    pub student_id: i32,
    pub content: String,
}

impl From<CreateReportDto> for ReportFields {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            course_id: dto.course_id,
            student_id: dto.student_id,
            content: dto.content,
        }
    }
}

impl From<UpdateReportDto> for ReportFields {
    fn from(dto: UpdateReportDto) -> Self {
        Self {
            course_id: dto.course_id,
            student_id: dto.student_id,
            content: dto.content,
        }
    }
}
