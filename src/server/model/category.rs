//! Category and sub-category domain models and parameters.

use crate::model::category::{
    CategoryDto, CreateCategoryDto, CreateSubCategoryDto, SubCategoryDto, UpdateCategoryDto,
    UpdateSubCategoryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubCategory {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
}

impl SubCategory {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::sub_category::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> SubCategoryDto {
        SubCategoryDto {
            id: self.id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Parameters for overwriting a category's name and description.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Parameters for creating a sub-category under an existing category.
#[derive(Debug, Clone)]
pub struct CreateSubCategoryParams {
    pub category_id: i32,
    pub name: String,
    pub description: String,
}

impl CreateSubCategoryParams {
    pub fn from_dto(category_id: i32, dto: CreateSubCategoryDto) -> Self {
        Self {
            category_id,
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubCategoryParams {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl UpdateSubCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateSubCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
