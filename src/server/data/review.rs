use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review.
    ///
    /// Fails with a unique constraint violation when the student already reviewed the course.
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            course_id: ActiveValue::Set(params.course_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let review = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(review.map(Review::from_entity))
    }

    pub async fn exists_for_student_and_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::StudentId.eq(student_id))
            .filter(entity::review::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::CourseId.eq(course_id))
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    /// Overwrites rating and comment of an existing review
    pub async fn update(&self, id: i32, rating: i32, comment: String) -> Result<Review, DbErr> {
        let review = entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Review with id {} not found",
                id
            )))?;

        let mut active_model: entity::review::ActiveModel = review.into();
        active_model.rating = ActiveValue::Set(rating);
        active_model.comment = ActiveValue::Set(comment);

        let review = active_model.update(self.db).await?;

        Ok(Review::from_entity(review))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
