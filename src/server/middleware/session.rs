//! Type-safe session management wrapper.
//!
//! The authenticated student's ID is written into the session under
//! `SESSION_AUTH_STUDENT_ID` by the identity provider and read back by request
//! handlers through `AuthSession`, which keeps the session key and value type in
//! one place.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

// Session key constants
pub const SESSION_AUTH_STUDENT_ID: &str = "auth:student";

/// Authentication session management.
///
/// Handles the authenticated student's identity and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Retrieves the student's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(student_id))` - Student is logged in
    /// - `Ok(None)` - No student in session (not logged in)
    /// - `Err(AppError::AuthErr(InvalidSessionValue))` - Stored value is not an `i32` ID
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session store
    pub async fn get_student_id(&self) -> Result<Option<i32>, AppError> {
        let Some(value) = self.session.get_value(SESSION_AUTH_STUDENT_ID).await? else {
            return Ok(None);
        };

        value
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map(Some)
            .ok_or_else(|| AuthError::InvalidSessionValue(value.to_string()).into())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
