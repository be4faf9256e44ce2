//! Sub-category factory for creating test sub-category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sub-categories under a parent category.
pub struct SubCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    description: String,
}

impl<'a> SubCategoryFactory<'a> {
    /// Creates a new SubCategoryFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Parent category ID
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Sub-category {}", id),
            description: format!("Description for sub-category {}", id),
        }
    }

    /// Sets the sub-category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the sub-category entity into the database.
    pub async fn build(self) -> Result<entity::sub_category::Model, DbErr> {
        entity::sub_category::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sub-category with default values under the given category.
pub async fn create_sub_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::sub_category::Model, DbErr> {
    SubCategoryFactory::new(db, category_id).build().await
}
