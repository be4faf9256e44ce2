use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{
    CreateSubCategoryParams, SubCategory, UpdateSubCategoryParams,
};

pub struct SubCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sub-category attached to its parent category
    pub async fn create(&self, params: CreateSubCategoryParams) -> Result<SubCategory, DbErr> {
        let sub_category = entity::sub_category::ActiveModel {
            category_id: ActiveValue::Set(params.category_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SubCategory::from_entity(sub_category))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SubCategory>, DbErr> {
        let sub_category = entity::prelude::SubCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(sub_category.map(SubCategory::from_entity))
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SubCategory::find()
            .filter(entity::sub_category::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the sub-categories of a category, newest first
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<SubCategory>, DbErr> {
        let sub_categories = entity::prelude::SubCategory::find()
            .filter(entity::sub_category::Column::CategoryId.eq(category_id))
            .order_by_desc(entity::sub_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(sub_categories
            .into_iter()
            .map(SubCategory::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        params: UpdateSubCategoryParams,
    ) -> Result<Option<SubCategory>, DbErr> {
        let Some(sub_category) = entity::prelude::SubCategory::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::sub_category::ActiveModel = sub_category.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);

        let sub_category = active_model.update(self.db).await?;

        Ok(Some(SubCategory::from_entity(sub_category)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SubCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
