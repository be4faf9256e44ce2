use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, course::CourseRepository,
        sub_category::SubCategoryRepository,
    },
    error::{
        domain::{on_unique_violation, DomainError},
        AppError,
    },
    model::{
        category::{Category, CreateCategoryParams, SubCategory, UpdateCategoryParams},
        course::Course,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category whose name must not already exist
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.exists_by_name(&params.name).await? {
            tracing::warn!("Rejected duplicate category name {:?}", params.name);
            return Err(DomainError::CategoryExist.into());
        }

        let category = repo
            .create(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::CategoryExist))?;

        tracing::info!("Created category {}", category.id);

        Ok(category)
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound.into())
    }

    /// Gets the courses filed under a category
    pub async fn get_courses(&self, id: i32) -> Result<Vec<Course>, AppError> {
        self.get_by_id(id).await?;

        let course_repo = CourseRepository::new(self.db);

        Ok(course_repo.get_by_category(id).await?)
    }

    pub async fn get_sub_categories(&self, id: i32) -> Result<Vec<SubCategory>, AppError> {
        self.get_by_id(id).await?;

        let sub_category_repo = SubCategoryRepository::new(self.db);

        Ok(sub_category_repo.get_by_category(id).await?)
    }

    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        repo.update(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::CategoryExist))?
            .ok_or_else(|| DomainError::CategoryNotFound.into())
    }

    /// Deletes a category
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted category {}", id);
        }

        Ok(deleted)
    }
}
