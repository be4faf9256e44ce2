use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student, UpdateStudentParams};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(student.map(Student::from_entity))
    }

    /// Finds the student registered with `email`, if any
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(student.map(Student::from_entity))
    }

    /// Gets one zero-based page of students sorted by id descending
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Student>, u64), DbErr> {
        let paginator = entity::prelude::Student::find()
            .order_by_desc(entity::student::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page).await?;

        Ok((
            students.into_iter().map(Student::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.email = ActiveValue::Set(params.email);

        let student = active_model.update(self.db).await?;

        Ok(Some(Student::from_entity(student)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
