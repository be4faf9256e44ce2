use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{CreateReviewParams, Review, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a course as the authenticated student.
///
/// Only students who completed every lesson of the course may review it, once.
///
/// # Returns
/// - `201 Created` - Successfully created review
/// - `400 Bad Request` - Rating outside 1..=5 (`INVALID_RATING`)
/// - `401 Unauthorized` - No student in session
/// - `403 Forbidden` - Course not finished (`COURSE_NOT_FINISHED`)
/// - `404 Not Found` - `STUDENT_NOT_FOUND` or `COURSE_NOT_FOUND`
/// - `409 Conflict` - Course already reviewed (`REVIEW_EXIST`)
#[utoipa::path(
    post,
    path = "/api/reviews/course/{course_id}",
    tag = REVIEW_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Course not finished", body = ErrorDto),
        (status = 404, description = "Student or course not found", body = ErrorDto),
        (status = 409, description = "Review already exists", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = ReviewService::new(&state.db);

    let review = service
        .create(CreateReviewParams::from_dto(student_id, course_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reviews.into_iter().map(Review::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Update the caller's own review.
///
/// A review that does not exist or belongs to another student is rejected with
/// `UNKNOWN_ERROR`.
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Successfully updated review", body = ReviewDto),
        (status = 400, description = "Invalid rating or not the caller's review", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = ReviewService::new(&state.db);

    let review = service
        .update(UpdateReviewParams::from_dto(id, student_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Successfully deleted review"),
        (status = 400, description = "Not the caller's review", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = ReviewService::new(&state.db);

    service.delete(id, student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
