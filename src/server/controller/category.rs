use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, SubCategoryDto, UpdateCategoryDto},
        course::CourseDto,
    },
    server::{
        error::AppError,
        model::{
            category::{Category, CreateCategoryParams, SubCategory, UpdateCategoryParams},
            course::Course,
        },
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a new category.
///
/// Category names are unique; the name is checked before insert and the database
/// constraint rejects a concurrent duplicate.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category name and description
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `409 Conflict` - A category with this name exists (`CATEGORY_EXIST`)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let params = CreateCategoryParams::from_dto(payload);

    let category = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get all categories, newest first.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(Category::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific category by ID.
///
/// # Returns
/// - `200 OK` - Category details
/// - `404 Not Found` - Category not found
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Get the courses filed under a category.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/courses",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let courses = service.get_courses(id).await?;

    Ok((
        StatusCode::OK,
        Json(courses.into_iter().map(Course::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get the sub-categories of a category.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/sub-categories",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Successfully retrieved sub-categories", body = Vec<SubCategoryDto>),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category_sub_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let sub_categories = service.get_sub_categories(id).await?;

    Ok((
        StatusCode::OK,
        Json(
            sub_categories
                .into_iter()
                .map(SubCategory::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update a category.
///
/// Overwrites the name and description.
///
/// # Returns
/// - `200 OK` - Successfully updated category
/// - `404 Not Found` - Category not found
/// - `409 Conflict` - Another category already uses the name
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let params = UpdateCategoryParams::from_dto(id, payload);

    let category = service.update(params).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Courses and sub-categories of the category are removed by the database cascade.
///
/// # Returns
/// - `204 No Content` - Successfully deleted category
/// - `404 Not Found` - Category not found
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
