use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        course::{CompletionRateDto, CourseDto, CourseRatingDto, CreateCourseDto, UpdateCourseDto},
        lesson::LessonDto,
        review::ReviewDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::{
            course::{Course, CreateCourseParams, UpdateCourseParams},
            lesson::Lesson,
            review::Review,
        },
        service::{course::CourseService, lesson::LessonService},
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// The category must exist. When a sub-category is given it must exist and belong
/// to the same category.
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `404 Not Found` - `CATEGORY_NOT_FOUND` or `SUB_CATEGORY_NOT_FOUND`
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 404, description = "Category or sub-category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.create(CreateCourseParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get a paginated list of courses, newest first.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = PaginatedDto<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service.get_paginated(params.into_request()).await?;

    Ok((StatusCode::OK, Json(courses.into_dto(Course::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Update a course.
///
/// Overwrites every field, revalidating the category and sub-category.
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 404, description = "Course, category or sub-category not found", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service
        .update(UpdateCourseParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course along with its lessons, enrollments and reviews.
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/lessons",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Lessons of the course", body = Vec<LessonDto>),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course_lessons(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LessonService::new(&state.db);

    let lessons = service.get_by_course(id).await?;

    Ok((
        StatusCode::OK,
        Json(lessons.into_iter().map(Lesson::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/reviews",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Reviews of the course", body = Vec<ReviewDto>),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let reviews = service.get_reviews(id).await?;

    Ok((
        StatusCode::OK,
        Json(reviews.into_iter().map(Review::into_dto).collect::<Vec<_>>()),
    ))
}

/// Average rating of a course.
///
/// A course without reviews reports an average of 0.0.
#[utoipa::path(
    get,
    path = "/api/courses/{id}/rating",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Average rating", body = CourseRatingDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let rating = service.get_rating(id).await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}

/// Percentage of a course's enrollments that completed every lesson.
///
/// # Returns
/// - `200 OK` - Completion rate rounded to two decimals, 0.0 without enrollments
/// - `404 Not Found` - Course not found
#[utoipa::path(
    get,
    path = "/api/courses/{id}/completion-rate",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Completion rate", body = CompletionRateDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course_completion_rate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let rate = service.get_completion_rate(id).await?;

    Ok((StatusCode::OK, Json(rate.into_dto())))
}
