use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lesson::{CreateLessonParams, Lesson, UpdateLessonParams};

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, DbErr> {
        let lesson = entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(lesson))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lesson>, DbErr> {
        let lesson = entity::prelude::Lesson::find_by_id(id).one(self.db).await?;

        Ok(lesson.map(Lesson::from_entity))
    }

    /// Gets one zero-based page of lessons sorted by id descending
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Lesson>, u64), DbErr> {
        let paginator = entity::prelude::Lesson::find()
            .order_by_desc(entity::lesson::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let lessons = paginator.fetch_page(page).await?;

        Ok((lessons.into_iter().map(Lesson::from_entity).collect(), total))
    }

    /// Gets the lessons of a course in creation order
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Lesson>, DbErr> {
        let lessons = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await?;

        Ok(lessons.into_iter().map(Lesson::from_entity).collect())
    }

    /// Counts the lessons of a course
    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    pub async fn update(&self, params: UpdateLessonParams) -> Result<Option<Lesson>, DbErr> {
        let Some(lesson) = entity::prelude::Lesson::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::lesson::ActiveModel = lesson.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);

        let lesson = active_model.update(self.db).await?;

        Ok(Some(Lesson::from_entity(lesson)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Lesson::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
