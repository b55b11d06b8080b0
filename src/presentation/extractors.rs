use crate::application::auth::authorize::{AdminSession, AuthorizeUseCase};
use crate::application::auth::token_utils::bearer_token;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Admin session extractor.
/// Runs the auth gate on the `Authorization: Bearer` header; handlers that take it
/// list it first so a rejected token short-circuits before the body is read.
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            AppError::Unauthorized("Invalid Authorization header format".to_string())
        })?;

        AuthorizeUseCase::new(
            state.admin.clone(),
            state.auth_service.clone(),
            state.repositories.revoked_tokens.clone(),
        )
        .execute(token)
        .await
    }
}
