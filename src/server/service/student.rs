use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{
        domain::{on_unique_violation, DomainError},
        AppError,
    },
    model::{
        pagination::Paginated,
        student::{CreateStudentParams, Student, UpdateStudentParams},
    },
    util::pagination::PageRequest,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student, rejecting an email that is already taken
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(DomainError::EmailExist.into());
        }

        let student = repo
            .create(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::EmailExist))?;

        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::StudentNotFound.into())
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        let (students, total) = repo.get_paginated(page.index(), page.page_size).await?;

        Ok(page.paginate(students, total))
    }

    /// Overwrites a student's profile; the new email must not belong to another student
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if let Some(owner) = repo.find_by_email(&params.email).await? {
            if owner.id != params.id {
                return Err(DomainError::EmailExist.into());
            }
        }

        repo.update(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::EmailExist))?
            .ok_or_else(|| DomainError::StudentNotFound.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(DomainError::StudentNotFound.into());
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }
}
