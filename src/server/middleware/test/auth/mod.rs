use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, SESSION_AUTH_STUDENT_ID},
    },
};
use test_utils::builder::TestBuilder;

mod require_student;
