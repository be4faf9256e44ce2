use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, lesson::LessonRepository},
    error::{domain::DomainError, AppError},
    model::{
        lesson::{CreateLessonParams, Lesson, UpdateLessonParams},
        pagination::Paginated,
    },
    util::pagination::PageRequest,
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lesson in an existing course
    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let repo = LessonRepository::new(self.db);

        if course_repo.find_by_id(params.course_id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        let lesson = repo.create(params).await?;

        tracing::info!("Created lesson {} in course {}", lesson.id, lesson.course_id);

        Ok(lesson)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Lesson, AppError> {
        let repo = LessonRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::LessonNotFound.into())
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Lesson>, AppError> {
        let repo = LessonRepository::new(self.db);

        let (lessons, total) = repo.get_paginated(page.index(), page.page_size).await?;

        Ok(page.paginate(lessons, total))
    }

    /// Gets the lessons of a course in creation order
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Lesson>, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let repo = LessonRepository::new(self.db);

        if course_repo.find_by_id(course_id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        Ok(repo.get_by_course(course_id).await?)
    }

    pub async fn update(&self, params: UpdateLessonParams) -> Result<Lesson, AppError> {
        let repo = LessonRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| DomainError::LessonNotFound.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LessonRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(DomainError::LessonNotFound.into());
        }

        tracing::info!("Deleted lesson {}", id);

        Ok(())
    }
}
