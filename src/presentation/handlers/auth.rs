use crate::application::auth::admin_login::{AdminLoginRequest, AdminLoginResponse, AdminLoginUseCase};
use crate::application::auth::authorize::AdminSession;
use crate::application::auth::logout::LogoutUseCase;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Admin login
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = AdminLoginUseCase::new(
        state.admin.clone(),
        state.auth_service.clone(),
        state.password_service.clone(),
    );
    let response = use_case.execute(req).await?;

    Ok(Json(response))
}

/// Revoke the token used to call this endpoint
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
pub async fn admin_logout(
    session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = LogoutUseCase::new(state.repositories.revoked_tokens.clone());
    use_case.execute(&session).await?;

    Ok(StatusCode::NO_CONTENT)
}
