use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{CreateReportDto, ReportDto, UpdateReportDto},
    },
    server::{error::AppError, model::report::Report, service::report::ReportService, state::AppState},
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// File a report against a course.
///
/// # Returns
/// - `201 Created` - Successfully created report
/// - `404 Not Found` - `COURSE_NOT_FOUND` or `STUDENT_NOT_FOUND`
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Successfully created report", body = ReportDto),
        (status = 404, description = "Course or student not found", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReportService::new(&state.db);

    let report = service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reports", body = Vec<ReportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReportService::new(&state.db);

    let reports = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reports.into_iter().map(Report::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Successfully retrieved report", body = ReportDto),
        (status = 404, description = "Report not found", body = ErrorDto)
    ),
)]
pub async fn get_report_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReportService::new(&state.db);

    let report = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Successfully updated report", body = ReportDto),
        (status = 404, description = "Report, course or student not found", body = ErrorDto)
    ),
)]
pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReportService::new(&state.db);

    let report = service.update(id, payload.into()).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Delete a report.
///
/// Any failure while deleting is answered with `404 Not Found`.
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 204, description = "Successfully deleted report"),
        (status = 404, description = "Report could not be deleted")
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReportService::new(&state.db);

    match service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            tracing::warn!("Failed to delete report {}: {}", id, e);
            Ok(StatusCode::NOT_FOUND)
        }
    }
}
