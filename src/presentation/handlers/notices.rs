use crate::application::auth::authorize::AdminSession;
use crate::application::notices::create::{CreateNoticeRequest, CreateNoticeUseCase};
use crate::application::notices::delete::DeleteNoticeUseCase;
use crate::application::notices::list::{ListNoticesQuery, ListNoticesUseCase};
use crate::domain::notices::Notice;
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

/// Active notices, newest first; `all=true` includes inactive ones
#[utoipa::path(
    get,
    path = "/api/notices",
    params(ListNoticesQuery),
    responses(
        (status = 200, description = "Notices", body = Vec<Notice>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "notices",
    security(("bearer_auth" = []))
)]
pub async fn list_notices(
    _session: AdminSession,
    State(state): State<AppState>,
    Qs(query): Qs<ListNoticesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListNoticesUseCase::new(state.repositories.notices.clone());
    let notices = use_case.execute(query).await?;

    Ok(Json(notices))
}

#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = CreateNoticeRequest,
    responses(
        (status = 201, description = "Notice created", body = Notice),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "notices",
    security(("bearer_auth" = []))
)]
pub async fn create_notice(
    _session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateNoticeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateNoticeUseCase::new(state.repositories.notices.clone());
    let notice = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(notice)))
}

#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    params(("id" = String, Path, description = "Notice ID")),
    responses(
        (status = 204, description = "Notice deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Notice not found", body = ErrorResponse)
    ),
    tag = "notices",
    security(("bearer_auth" = []))
)]
pub async fn delete_notice(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteNoticeUseCase::new(state.repositories.notices.clone());
    use_case.execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
