use axum::Router;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth::{self, AUTH_TAG},
        category::{self, CATEGORY_TAG},
        course::{self, COURSE_TAG},
        enrollment::{self, ENROLLMENT_TAG},
        lesson::{self, LESSON_TAG},
        payment::{self, PAYMENT_TAG},
        report::{self, REPORT_TAG},
        review::{self, REVIEW_TAG},
        student::{self, STUDENT_TAG},
        sub_category::{self, SUB_CATEGORY_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "CourseHub API", description = "Online course platform backend"),
    tags(
        (name = AUTH_TAG, description = "Session identity"),
        (name = STUDENT_TAG, description = "Student accounts"),
        (name = CATEGORY_TAG, description = "Course categories"),
        (name = SUB_CATEGORY_TAG, description = "Course sub-categories"),
        (name = COURSE_TAG, description = "Courses and course statistics"),
        (name = LESSON_TAG, description = "Course lessons"),
        (name = ENROLLMENT_TAG, description = "Enrollments and lesson progress"),
        (name = PAYMENT_TAG, description = "Course purchases"),
        (name = REVIEW_TAG, description = "Course reviews"),
        (name = REPORT_TAG, description = "Course reports"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router(config: &Config) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_me))
        .routes(routes!(auth::logout))
        .routes(routes!(student::create_student, student::get_students))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(category::create_category, category::get_categories))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(category::get_category_courses))
        .routes(routes!(
            category::get_category_sub_categories,
            sub_category::create_sub_category
        ))
        .routes(routes!(
            sub_category::get_sub_category_by_id,
            sub_category::update_sub_category,
            sub_category::delete_sub_category
        ))
        .routes(routes!(course::create_course, course::get_courses))
        .routes(routes!(
            course::get_course_by_id,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(course::get_course_lessons))
        .routes(routes!(course::get_course_reviews))
        .routes(routes!(course::get_course_rating))
        .routes(routes!(course::get_course_completion_rate))
        .routes(routes!(lesson::create_lesson, lesson::get_lessons))
        .routes(routes!(
            lesson::get_lesson_by_id,
            lesson::update_lesson,
            lesson::delete_lesson
        ))
        .routes(routes!(enrollment::get_enrollments))
        .routes(routes!(enrollment::create_enrollment))
        .routes(routes!(enrollment::get_my_enrollments))
        .routes(routes!(enrollment::get_my_enrollment_for_course))
        .routes(routes!(enrollment::get_enrollment_by_id))
        .routes(routes!(enrollment::get_enrollment_progress))
        .routes(routes!(enrollment::complete_lesson))
        .routes(routes!(payment::create_payment, payment::get_my_payments))
        .routes(routes!(payment::get_payment_by_id))
        .routes(routes!(payment::update_payment_status))
        .routes(routes!(review::get_reviews))
        .routes(routes!(review::create_review))
        .routes(routes!(
            review::get_review_by_id,
            review::update_review,
            review::delete_review
        ))
        .routes(routes!(report::create_report, report::get_reports))
        .routes(routes!(
            report::get_report_by_id,
            report::update_report,
            report::delete_report
        ))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http());

    match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS layer for the configured frontend origin, if any.
///
/// `*` allows any origin.
fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origin = config.cors_origin.as_deref()?;

    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        match origin.parse() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS_ORIGIN {}", origin);
                return None;
            }
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
