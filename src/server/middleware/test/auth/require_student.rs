use super::*;

/// Tests an authenticated student passes the guard.
///
/// Verifies that the AuthGuard returns the student ID stored in the session by the
/// identity provider.
///
/// Expected: Ok(student_id)
#[tokio::test]
async fn returns_student_id_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session.insert(SESSION_AUTH_STUDENT_ID, 42).await?;

    let result = AuthGuard::new(session).require_student().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::StudentNotInSession)
#[tokio::test]
async fn rejects_session_without_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StudentNotInSession))
    ));

    Ok(())
}

/// Tests a non-numeric session value is rejected.
///
/// Verifies that a value under the student key which is not an integer ID is
/// reported as an invalid session value rather than a store failure.
///
/// Expected: Err(AuthError::InvalidSessionValue)
#[tokio::test]
async fn rejects_non_numeric_student_value() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session
        .insert(SESSION_AUTH_STUDENT_ID, "not-an-id")
        .await?;

    let result = AuthGuard::new(session).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSessionValue(_)))
    ));

    Ok(())
}

/// Tests an ID outside the `i32` range is rejected.
///
/// Expected: Err(AuthError::InvalidSessionValue)
#[tokio::test]
async fn rejects_out_of_range_student_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session
        .insert(SESSION_AUTH_STUDENT_ID, i64::from(i32::MAX) + 1)
        .await?;

    let result = AuthGuard::new(session).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSessionValue(_)))
    ));

    Ok(())
}

/// Tests clearing the session logs the student out.
///
/// Expected: Err(AuthError::StudentNotInSession) after clear
#[tokio::test]
async fn rejects_student_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    session.insert(SESSION_AUTH_STUDENT_ID, 7).await?;

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_student_id().await?, Some(7));
    auth_session.clear().await;

    assert_eq!(auth_session.get_student_id().await?, None);

    let result = AuthGuard::new(session).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StudentNotInSession))
    ));

    Ok(())
}
