use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::CurrentStudentDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the authenticated student.
///
/// Returns the ID of the student stored in the session by the identity provider.
///
/// # Returns
/// - `200 OK` - Caller's student ID
/// - `401 Unauthorized` - No student in session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated student", body = CurrentStudentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_me(session: Session) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    Ok((StatusCode::OK, Json(CurrentStudentDto { student_id })))
}

/// Log out by clearing the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
