use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CreateSubCategoryDto, SubCategoryDto, UpdateSubCategoryDto},
    },
    server::{
        error::AppError,
        model::category::{CreateSubCategoryParams, UpdateSubCategoryParams},
        service::sub_category::SubCategoryService,
        state::AppState,
    },
};

/// Tag for grouping sub-category endpoints in OpenAPI documentation
pub static SUB_CATEGORY_TAG: &str = "sub-category";

/// Create a sub-category under a category.
///
/// # Returns
/// - `201 Created` - Successfully created sub-category
/// - `404 Not Found` - Parent category not found (`CATEGORY_NOT_FOUND`)
/// - `409 Conflict` - Name already used (`SUB_CATEGORY_EXIST`)
#[utoipa::path(
    post,
    path = "/api/categories/{id}/sub-categories",
    tag = SUB_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Parent category ID")),
    request_body = CreateSubCategoryDto,
    responses(
        (status = 201, description = "Successfully created sub-category", body = SubCategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Sub-category name already exists", body = ErrorDto)
    ),
)]
pub async fn create_sub_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<CreateSubCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubCategoryService::new(&state.db);

    let sub_category = service
        .create(CreateSubCategoryParams::from_dto(category_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(sub_category.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/sub-categories/{id}",
    tag = SUB_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Sub-category ID")),
    responses(
        (status = 200, description = "Successfully retrieved sub-category", body = SubCategoryDto),
        (status = 404, description = "Sub-category not found", body = ErrorDto)
    ),
)]
pub async fn get_sub_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubCategoryService::new(&state.db);

    let sub_category = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(sub_category.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/sub-categories/{id}",
    tag = SUB_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Sub-category ID")),
    request_body = UpdateSubCategoryDto,
    responses(
        (status = 200, description = "Successfully updated sub-category", body = SubCategoryDto),
        (status = 404, description = "Sub-category not found", body = ErrorDto),
        (status = 409, description = "Sub-category name already exists", body = ErrorDto)
    ),
)]
pub async fn update_sub_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubCategoryService::new(&state.db);

    let sub_category = service
        .update(UpdateSubCategoryParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(sub_category.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/sub-categories/{id}",
    tag = SUB_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Sub-category ID")),
    responses(
        (status = 204, description = "Successfully deleted sub-category"),
        (status = 404, description = "Sub-category not found")
    ),
)]
pub async fn delete_sub_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubCategoryService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
