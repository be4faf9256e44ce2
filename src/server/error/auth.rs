use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No student identity is stored in the session.
    ///
    /// The caller has not been authenticated by the identity provider, or the
    /// session expired. Results in a 401 Unauthorized response.
    #[error("No authenticated student in session")]
    StudentNotInSession,

    /// Session holds an identity value that is not a valid student ID.
    ///
    /// Results in a 401 Unauthorized response and the value is logged at debug level.
    #[error("Invalid student id in session: {0}")]
    InvalidSessionValue(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants answer 401 Unauthorized with a generic message so the response
/// does not reveal what the session contained.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
                code: None,
            }),
        )
            .into_response()
    }
}
