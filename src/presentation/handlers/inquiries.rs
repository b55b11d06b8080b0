use crate::application::auth::authorize::AdminSession;
use crate::application::inquiries::get::GetInquiryUseCase;
use crate::application::inquiries::list::ListInquiriesUseCase;
use crate::application::inquiries::set_status::{SetInquiryStatusUseCase, SetStatusQuery};
use crate::application::inquiries::submit::{SubmitInquiryRequest, SubmitInquiryUseCase};
use crate::domain::inquiries::Inquiry;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Submit an admission inquiry (public)
#[utoipa::path(
    post,
    path = "/api/inquiries",
    request_body = SubmitInquiryRequest,
    responses(
        (status = 201, description = "Inquiry recorded", body = Inquiry),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "inquiries"
)]
pub async fn submit_inquiry(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SubmitInquiryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SubmitInquiryUseCase::new(state.repositories.inquiries.clone());
    let inquiry = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// List all inquiries, newest first
#[utoipa::path(
    get,
    path = "/api/inquiries",
    responses(
        (status = 200, description = "All inquiries", body = Vec<Inquiry>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "inquiries",
    security(("bearer_auth" = []))
)]
pub async fn list_inquiries(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListInquiriesUseCase::new(state.repositories.inquiries.clone());
    let inquiries = use_case.execute().await?;

    Ok(Json(inquiries))
}

#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    params(("id" = String, Path, description = "Inquiry ID")),
    responses(
        (status = 200, description = "Inquiry found", body = Inquiry),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse)
    ),
    tag = "inquiries",
    security(("bearer_auth" = []))
)]
pub async fn get_inquiry(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetInquiryUseCase::new(state.repositories.inquiries.clone());
    let inquiry = use_case.execute(&id).await?;

    Ok(Json(inquiry))
}

/// Move an inquiry to `new`, `contacted` or `completed`
#[utoipa::path(
    patch,
    path = "/api/inquiries/{id}",
    params(
        ("id" = String, Path, description = "Inquiry ID"),
        SetStatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = Inquiry),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
        (status = 422, description = "Unknown status", body = ErrorResponse)
    ),
    tag = "inquiries",
    security(("bearer_auth" = []))
)]
pub async fn set_inquiry_status(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Qs(query): Qs<SetStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SetInquiryStatusUseCase::new(state.repositories.inquiries.clone());
    let inquiry = use_case.execute(&id, &query.status).await?;

    Ok(Json(inquiry))
}
