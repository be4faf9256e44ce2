use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        category::{
            CreateCategoryParams, CreateSubCategoryParams, UpdateCategoryParams,
            UpdateSubCategoryParams,
        },
        student::CreateStudentParams,
    },
    service::{
        category::CategoryService, student::StudentService, sub_category::SubCategoryService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
