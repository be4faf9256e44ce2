use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{Course, CourseFields};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: CourseFields) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            category_id: ActiveValue::Set(fields.category_id),
            sub_category_id: ActiveValue::Set(fields.sub_category_id),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            price: ActiveValue::Set(fields.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(course))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(course.map(Course::from_entity))
    }

    /// Finds every course whose id is in `ids`, in no particular order
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(courses.into_iter().map(Course::from_entity).collect())
    }

    /// Gets one zero-based page of courses sorted by id descending
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Course>, u64), DbErr> {
        let paginator = entity::prelude::Course::find()
            .order_by_desc(entity::course::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let courses = paginator.fetch_page(page).await?;

        Ok((courses.into_iter().map(Course::from_entity).collect(), total))
    }

    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::CategoryId.eq(category_id))
            .order_by_desc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(courses.into_iter().map(Course::from_entity).collect())
    }

    /// Overwrites every editable field, returning None when the course doesn't exist
    pub async fn update(&self, id: i32, fields: CourseFields) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.category_id = ActiveValue::Set(fields.category_id);
        active_model.sub_category_id = ActiveValue::Set(fields.sub_category_id);
        active_model.title = ActiveValue::Set(fields.title);
        active_model.description = ActiveValue::Set(fields.description);
        active_model.price = ActiveValue::Set(fields.price);

        let course = active_model.update(self.db).await?;

        Ok(Some(Course::from_entity(course)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
