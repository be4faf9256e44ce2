use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        lesson::{CreateLessonDto, LessonDto, UpdateLessonDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::lesson::{CreateLessonParams, Lesson, UpdateLessonParams},
        service::lesson::LessonService,
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Add a lesson to a course.
///
/// # Returns
/// - `201 Created` - Successfully created lesson
/// - `404 Not Found` - Course not found (`COURSE_NOT_FOUND`)
#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Successfully created lesson", body = LessonDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    let lesson = service.create(CreateLessonParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = LESSON_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved lessons", body = PaginatedDto<LessonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    let lessons = service.get_paginated(params.into_request()).await?;

    Ok((StatusCode::OK, Json(lessons.into_dto(Lesson::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Successfully retrieved lesson", body = LessonDto),
        (status = 404, description = "Lesson not found", body = ErrorDto)
    ),
)]
pub async fn get_lesson_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    let lesson = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Successfully updated lesson", body = LessonDto),
        (status = 404, description = "Lesson not found", body = ErrorDto)
    ),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    let lesson = service
        .update(UpdateLessonParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 204, description = "Successfully deleted lesson"),
        (status = 404, description = "Lesson not found", body = ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
