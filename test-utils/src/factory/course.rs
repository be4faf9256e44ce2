//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let course = CourseFactory::new(&db, category.id)
///     .title("Rust for Beginners")
///     .price(49.0)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    sub_category_id: Option<i32>,
    title: String,
    description: String,
    price: f64,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - price: `19.99`
    /// - no sub-category
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            sub_category_id: None,
            title: format!("Course {}", id),
            description: format!("Description for course {}", id),
            price: 19.99,
        }
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the sub-category the course is filed under.
    pub fn sub_category_id(mut self, sub_category_id: Option<i32>) -> Self {
        self.sub_category_id = sub_category_id;
        self
    }

    /// Sets the course price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            sub_category_id: ActiveValue::Set(self.sub_category_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values in the given category.
pub async fn create_course(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, category_id).build().await
}
