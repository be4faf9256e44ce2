use chrono::Utc;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::enrollment::{enrollment_description, Enrollment};

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an ENROLLED enrollment with its generated description.
    ///
    /// Fails with a unique constraint violation when the student is already enrolled
    /// in the course.
    pub async fn create(&self, student_id: i32, course_id: i32) -> Result<Enrollment, DbErr> {
        let enrollment = entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            course_id: ActiveValue::Set(course_id),
            status: ActiveValue::Set(EnrollmentStatus::Enrolled),
            description: ActiveValue::Set(enrollment_description(student_id, course_id)),
            enrolled_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(enrollment))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }

    pub async fn find_by_student_and_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .one(self.db)
            .await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }

    /// Gets one zero-based page of all enrollments sorted by id descending
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Enrollment>, u64), DbErr> {
        let paginator = entity::prelude::Enrollment::find()
            .order_by_desc(entity::enrollment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let enrollments = paginator.fetch_page(page).await?;

        Ok((
            enrollments
                .into_iter()
                .map(Enrollment::from_entity)
                .collect(),
            total,
        ))
    }

    /// Gets one zero-based page of a student's enrollments sorted by id descending
    pub async fn get_by_student_paginated(
        &self,
        student_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Enrollment>, u64), DbErr> {
        let paginator = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .order_by_desc(entity::enrollment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let enrollments = paginator.fetch_page(page).await?;

        Ok((
            enrollments
                .into_iter()
                .map(Enrollment::from_entity)
                .collect(),
            total,
        ))
    }

    /// Gets every enrollment of a course
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Enrollment>, DbErr> {
        let enrollments = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(enrollments
            .into_iter()
            .map(Enrollment::from_entity)
            .collect())
    }

    /// Sets the status of an enrollment
    pub async fn set_status(&self, id: i32, status: EnrollmentStatus) -> Result<Enrollment, DbErr> {
        let enrollment = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Enrollment with id {} not found",
                id
            )))?;

        let mut active_model: entity::enrollment::ActiveModel = enrollment.into();
        active_model.status = ActiveValue::Set(status);

        let enrollment = active_model.update(self.db).await?;

        Ok(Enrollment::from_entity(enrollment))
    }
}
