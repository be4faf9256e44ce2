use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guard resolving the caller's identity from the session.
///
/// Handlers call the guard before any self-scoped operation and pass the returned
/// student ID explicitly to the service layer.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an authenticated student.
    ///
    /// # Returns
    /// - `Ok(student_id)` - ID stored in the session
    /// - `Err(AppError::AuthErr(StudentNotInSession))` - No identity in session
    /// - `Err(AppError::AuthErr(InvalidSessionValue))` - Stored value is not an ID
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session store
    pub async fn require_student(&self) -> Result<i32, AppError> {
        AuthSession::new(self.session)
            .get_student_id()
            .await?
            .ok_or_else(|| AuthError::StudentNotInSession.into())
    }
}
