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
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::payment::{status_from_dto, Payment},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Create a payment for the authenticated student.
///
/// The payment starts `PENDING` and holds one detail per course, priced at the
/// course's current price.
///
/// # Returns
/// - `201 Created` - Pending payment with its details and total
/// - `400 Bad Request` - Empty or duplicate course list (`INVALID_PAYMENT`)
/// - `401 Unauthorized` - No student in session
/// - `404 Not Found` - `STUDENT_NOT_FOUND` or `COURSE_NOT_FOUND`
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Successfully created payment", body = PaymentDto),
        (status = 400, description = "Invalid course list", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Student or course not found", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = PaymentService::new(&state.db);

    let payment = service.create(student_id, payload.course_ids).await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Get the authenticated student's payments.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Caller's payments", body = Vec<PaymentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student_id = AuthGuard::new(&session).require_student().await?;

    let service = PaymentService::new(&state.db);

    let payments = service.get_by_student(student_id).await?;

    Ok((
        StatusCode::OK,
        Json(payments.into_iter().map(Payment::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Successfully retrieved payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Set the status of a payment.
///
/// Used by the payment processor callback to approve or reject a payment.
#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Successfully updated payment", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service
        .update_status(id, status_from_dto(payload.status))
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
