use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, report::ReportRepository, student::StudentRepository},
    error::{domain::DomainError, AppError},
    model::report::{Report, ReportFields},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: ReportFields) -> Result<Report, AppError> {
        self.check_references(&fields).await?;

        let repo = ReportRepository::new(self.db);
        let report = repo.create(fields).await?;

        tracing::info!(
            "Student {} reported course {} (report {})",
            report.student_id,
            report.course_id,
            report.id
        );

        Ok(report)
    }

    pub async fn get_all(&self) -> Result<Vec<Report>, AppError> {
        let repo = ReportRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Report, AppError> {
        let repo = ReportRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ReportNotFound.into())
    }

    /// Overwrites a report after re-resolving its course and student
    pub async fn update(&self, id: i32, fields: ReportFields) -> Result<Report, AppError> {
        let repo = ReportRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::ReportNotFound.into());
        }

        self.check_references(&fields).await?;

        repo.update(id, fields)
            .await?
            .ok_or_else(|| DomainError::ReportNotFound.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReportRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(DomainError::ReportNotFound.into());
        }

        Ok(())
    }

    async fn check_references(&self, fields: &ReportFields) -> Result<(), AppError> {
        let course_repo = CourseRepository::new(self.db);
        let student_repo = StudentRepository::new(self.db);

        if course_repo.find_by_id(fields.course_id).await?.is_none() {
            return Err(DomainError::CourseNotFound.into());
        }

        if student_repo.find_by_id(fields.student_id).await?.is_none() {
            return Err(DomainError::StudentNotFound.into());
        }

        Ok(())
    }
}
