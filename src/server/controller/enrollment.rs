use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        enrollment::{EnrollmentDto, ProgressDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::enrollment::Enrollment,
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Enroll the authenticated student in a course.
///
/// The student needs an APPROVED payment covering the course.
///
/// # Returns
/// - `201 Created` - Enrollment with status `ENROLLED`
/// - `401 Unauthorized` - No student in session
/// - `404 Not Found` - `STUDENT_NOT_FOUND` or `COURSE_NOT_FOUND`
/// - `409 Conflict` - Already enrolled (`ENROLLMENT_EXIST`)
/// - `403 Forbidden` - No approved payment for the course (`COURSE_NOT_PURCHASED`)
#[utoipa::path(
    post,
    path = "/api/enrollments/course/{course_id}",
    tag = ENROLLMENT_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 201, description = "Successfully enrolled", body = EnrollmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Course not purchased", body = ErrorDto),
        (status = 404, description = "Student or course not found", body = ErrorDto),
        (status = 409, description = "Already enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service.create(student_id, course_id).await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

/// Get a paginated list of every enrollment, newest first.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved enrollments", body = PaginatedDto<EnrollmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let enrollments = service.get_paginated(params.into_request()).await?;

    Ok((
        StatusCode::OK,
        Json(enrollments.into_dto(Enrollment::into_dto)),
    ))
}

/// Get the authenticated student's enrollments.
#[utoipa::path(
    get,
    path = "/api/enrollments/me",
    tag = ENROLLMENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Caller's enrollments", body = PaginatedDto<EnrollmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_enrollments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = EnrollmentService::new(&state.db);

    let enrollments = service
        .get_by_student_paginated(student_id, params.into_request())
        .await?;

    Ok((
        StatusCode::OK,
        Json(enrollments.into_dto(Enrollment::into_dto)),
    ))
}

/// Get the authenticated student's enrollment in one course.
#[utoipa::path(
    get,
    path = "/api/enrollments/me/course/{course_id}",
    tag = ENROLLMENT_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Caller's enrollment", body = EnrollmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not enrolled", body = ErrorDto)
    ),
)]
pub async fn get_my_enrollment_for_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = EnrollmentService::new(&state.db);

    let enrollment = service
        .get_for_student_and_course(student_id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Successfully retrieved enrollment", body = EnrollmentDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto)
    ),
)]
pub async fn get_enrollment_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let enrollment = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

/// Lesson progress of an enrollment.
#[utoipa::path(
    get,
    path = "/api/enrollments/{id}/progress",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Completed and total lessons", body = ProgressDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto)
    ),
)]
pub async fn get_enrollment_progress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let progress = service.get_progress(id).await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

/// Mark a lesson completed for one of the caller's enrollments.
///
/// Completing the same lesson twice has no further effect. The enrollment moves to
/// `COMPLETED` once every lesson of its course is done.
///
/// # Returns
/// - `200 OK` - Progress after the completion
/// - `401 Unauthorized` - No student in session
/// - `404 Not Found` - Enrollment not the caller's, or lesson not in the course
#[utoipa::path(
    post,
    path = "/api/enrollments/{id}/lessons/{lesson_id}/complete",
    tag = ENROLLMENT_TAG,
    params(
        ("id" = i32, Path, description = "Enrollment ID"),
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Progress after completion", body = ProgressDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Enrollment or lesson not found", body = ErrorDto)
    ),
)]
pub async fn complete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path((id, lesson_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = EnrollmentService::new(&state.db);

    let progress = service.complete_lesson(student_id, id, lesson_id).await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}
