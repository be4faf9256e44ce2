use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, sub_category::SubCategoryRepository},
    error::{
        domain::{on_unique_violation, DomainError},
        AppError,
    },
    model::category::{CreateSubCategoryParams, SubCategory, UpdateSubCategoryParams},
};

pub struct SubCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sub-category under an existing category.
    ///
    /// The parent must exist and the name must be unique across all sub-categories.
    pub async fn create(&self, params: CreateSubCategoryParams) -> Result<SubCategory, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let repo = SubCategoryRepository::new(self.db);

        if category_repo.find_by_id(params.category_id).await?.is_none() {
            return Err(DomainError::CategoryNotFound.into());
        }

        if repo.exists_by_name(&params.name).await? {
            tracing::warn!("Rejected duplicate sub-category name {:?}", params.name);
            return Err(DomainError::SubCategoryExist.into());
        }

        let sub_category = repo
            .create(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::SubCategoryExist))?;

        tracing::info!(
            "Created sub-category {} under category {}",
            sub_category.id,
            sub_category.category_id
        );

        Ok(sub_category)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SubCategory, AppError> {
        let repo = SubCategoryRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::SubCategoryNotFound.into())
    }

    pub async fn update(&self, params: UpdateSubCategoryParams) -> Result<SubCategory, AppError> {
        let repo = SubCategoryRepository::new(self.db);

        repo.update(params)
            .await
            .map_err(|e| on_unique_violation(e, DomainError::SubCategoryExist))?
            .ok_or_else(|| DomainError::SubCategoryNotFound.into())
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SubCategoryRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
